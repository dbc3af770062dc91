//! Input validation for issue write requests.
//!
//! Request payloads arrive as [`CreateIssueRequest`] and [`UpdateIssueRequest`].
//! Their fields hold raw JSON values so that missing, `null`, and wrong-type
//! values are all reported with a precise message instead of a generic
//! deserialization failure. The validators turn them into the typed
//! [`NewIssue`] / [`IssueUpdate`] inputs the store accepts. Rules are checked in
//! field order and the first failure wins.

use crate::domain::{IssueStatus, IssueUpdate, MIN_TEXT_LENGTH, NewIssue};
use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Payload for creating an issue.
///
/// A field is `None` when its key is absent and `Some` otherwise, including
/// an explicit `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueRequest {
    /// Issue title (required, at least 3 characters after trimming)
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub title: Option<Value>,

    /// Issue description (required, at least 3 characters after trimming)
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub description: Option<Value>,

    /// Initial status (defaults to `open`)
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<IssueStatus>")]
    pub status: Option<Value>,
}

/// Payload for updating an issue. Every field is optional.
///
/// Absent fields are `None`. Anything sent, `null` included, is `Some` and
/// must be valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpdateIssueRequest {
    /// New title
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub title: Option<Value>,

    /// New description
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<String>")]
    pub description: Option<Value>,

    /// New status
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<IssueStatus>")]
    pub status: Option<Value>,
}

/// Read a request body into a payload.
///
/// Anything other than a JSON object (`null`, arrays, scalars) is read as an
/// empty payload, so the validators report the missing fields.
///
/// # Errors
///
/// Returns `Error::Validation` if an object cannot be read as `T`.
pub fn payload_from_json<T>(body: Value) -> Result<T>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match body {
        Value::Object(_) => {
            serde_json::from_value(body).map_err(|e| Error::Validation(e.to_string()))
        }
        _ => Ok(T::default()),
    }
}

/// Marks a field as present whenever its key appears, even with a `null` value.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Validate a create payload.
///
/// # Errors
///
/// Returns `Error::Validation` with the message of the first failing rule.
pub fn validate_create(request: &CreateIssueRequest) -> Result<NewIssue> {
    let title = text(request.title.as_ref())
        .filter(|t| long_enough(t))
        .ok_or_else(|| required_message("title"))?;
    let description = text(request.description.as_ref())
        .filter(|d| long_enough(d))
        .ok_or_else(|| required_message("description"))?;
    let status = request.status.as_ref().map(parse_status).transpose()?;

    Ok(NewIssue {
        title: title.to_string(),
        description: description.to_string(),
        status,
    })
}

/// Validate an update payload. Only fields that are present are checked, so an
/// empty payload yields an empty update.
///
/// # Errors
///
/// Returns `Error::Validation` with the message of the first failing rule.
pub fn validate_update(request: &UpdateIssueRequest) -> Result<IssueUpdate> {
    let title = request
        .title
        .as_ref()
        .map(|t| optional_text("title", t))
        .transpose()?;
    let description = request
        .description
        .as_ref()
        .map(|d| optional_text("description", d))
        .transpose()?;
    let status = request.status.as_ref().map(parse_status).transpose()?;

    Ok(IssueUpdate {
        title,
        description,
        status,
    })
}

/// The string inside a field, or `None` if it is absent or not a string.
fn text(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

fn long_enough(value: &str) -> bool {
    value.trim().chars().count() >= MIN_TEXT_LENGTH
}

fn optional_text(field: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .filter(|v| long_enough(v))
        .map(str::to_string)
        .ok_or_else(|| {
            Error::Validation(format!(
                "{field} must be at least {MIN_TEXT_LENGTH} characters"
            ))
        })
}

fn parse_status(value: &Value) -> Result<IssueStatus> {
    value
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or_else(status_message)
}

fn required_message(field: &str) -> Error {
    Error::Validation(format!(
        "{field} is required and must be at least {MIN_TEXT_LENGTH} characters"
    ))
}

fn status_message() -> Error {
    Error::Validation(format!(
        "status must be one of: {}",
        IssueStatus::valid_values()
    ))
}
