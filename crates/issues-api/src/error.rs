//! Error types for the issues HTTP API.

use crate::models::ErrorBody;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use issues::error::Error as IssueError;
use thiserror::Error;

/// Message returned for any failure that is not the client's fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Message returned when the request body is not valid JSON.
pub const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";

/// Errors that can occur while handling an API request.
///
/// Every variant maps to a status code and a `{"message": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An error from the issue store or validator.
    #[error(transparent)]
    Issue(#[from] IssueError),

    /// The request body could not be read as JSON. The parser detail is
    /// logged, never returned.
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),

    /// No route matches the request.
    #[error("Not found")]
    RouteNotFound,

    /// Unexpected failure. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    ///
    /// - Validation, invalid status, invalid id, bad body: 400 Bad Request
    /// - Missing issue or route: 404 Not Found
    /// - Internal: 500 Internal Server Error
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Issue(IssueError::NotFound(_)) | Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Issue(
                IssueError::Validation(_)
                | IssueError::InvalidId { .. }
                | IssueError::InvalidStatus(_),
            )
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message placed in the response body.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::InvalidBody(_) => INVALID_BODY_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use issues::domain::IssueId;
    use rstest::rstest;

    #[rstest]
    #[case::validation(
        ApiError::Issue(IssueError::Validation("title is required".into())),
        StatusCode::BAD_REQUEST
    )]
    #[case::invalid_id(
        ApiError::Issue(IssueError::InvalidId { input: "abc".into() }),
        StatusCode::BAD_REQUEST
    )]
    #[case::invalid_status(
        ApiError::Issue(IssueError::InvalidStatus("done".into())),
        StatusCode::BAD_REQUEST
    )]
    #[case::not_found(
        ApiError::Issue(IssueError::NotFound(IssueId::new(4))),
        StatusCode::NOT_FOUND
    )]
    #[case::bad_body(ApiError::InvalidBody("EOF".into()), StatusCode::BAD_REQUEST)]
    #[case::no_route(ApiError::RouteNotFound, StatusCode::NOT_FOUND)]
    #[case::internal(ApiError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_error_status_codes(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
        assert_eq!(error.into_response().status(), expected);
    }

    #[test]
    fn test_messages_pass_through_issue_errors() {
        let error = ApiError::from(IssueError::NotFound(IssueId::new(4)));
        assert_eq!(error.message(), "Issue not found");

        let error = ApiError::from(IssueError::InvalidId { input: "x".into() });
        assert_eq!(error.message(), "Invalid id");
    }

    #[test]
    fn test_internal_errors_do_not_leak_details() {
        let error = ApiError::Internal("secret database error".into());
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_body_errors_do_not_leak_parser_details() {
        let error = ApiError::InvalidBody("EOF while parsing at line 1 column 10".into());
        assert_eq!(error.message(), INVALID_BODY_MESSAGE);
        assert!(error.to_string().contains("line 1 column 10"));
    }
}
