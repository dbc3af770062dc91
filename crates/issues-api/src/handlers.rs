//! Request handlers for the issue endpoints.
//!
//! Each handler runs the validator for write requests, calls the store, and
//! converts the result into a response. Failures short-circuit through
//! [`ApiError`].

use crate::error::ApiError;
use crate::models::HealthResponse;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use issues::domain::Issue;
use issues::storage::SharedStore;
use issues::validation::{
    CreateIssueRequest, UpdateIssueRequest, payload_from_json, validate_create, validate_update,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Shared application dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Issue store used by every handler.
    pub store: SharedStore,
}

impl AppState {
    /// Create state around the given store.
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// `POST /issues`
///
/// # Errors
///
/// 400 if the body is not JSON or fails validation.
pub async fn create_issue(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Issue>), ApiError> {
    let request: CreateIssueRequest = read_payload(body)?;
    let new_issue = validate_create(&request)?;

    let issue = state.store.create(new_issue).await?;
    info!(id = %issue.id, "Issue created");

    Ok((StatusCode::CREATED, Json(issue)))
}

/// `GET /issues`
///
/// # Errors
///
/// Only fails if the store does.
pub async fn list_issues(State(state): State<AppState>) -> Result<Json<Vec<Issue>>, ApiError> {
    Ok(Json(state.store.list().await?))
}

/// `GET /issues/{id}`
///
/// # Errors
///
/// 400 for a non-integer id, 404 if the issue does not exist.
pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Issue>, ApiError> {
    Ok(Json(state.store.get(&id).await?))
}

/// `PUT /issues/{id}`
///
/// The body is validated before the id is looked at. A request without a
/// body is an empty update.
///
/// # Errors
///
/// 400 for a bad body or non-integer id, 404 if the issue does not exist.
pub async fn update_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Issue>, ApiError> {
    let request: UpdateIssueRequest = read_payload(body)?;
    let updates = validate_update(&request)?;

    let issue = state.store.update(&id, updates).await?;
    info!(id = %issue.id, "Issue updated");

    Ok(Json(issue))
}

/// `DELETE /issues/{id}`
///
/// # Errors
///
/// 400 for a non-integer id, 404 if the issue does not exist.
pub async fn delete_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(&id).await?;
    info!(id = %id, "Issue deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Turn an extracted JSON body into a request payload.
///
/// A request with no JSON content type (including one with no body at all)
/// reads as an empty payload. Malformed JSON is still rejected.
fn read_payload<T>(body: Result<Json<Value>, JsonRejection>) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    let body = match body {
        Ok(Json(value)) => value,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => return Err(rejection.into()),
    };
    Ok(payload_from_json(body)?)
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    ApiError::RouteNotFound
}
