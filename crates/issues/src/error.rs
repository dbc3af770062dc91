//! Error types for issue operations.

use crate::domain::IssueId;
use thiserror::Error;

/// The error type for issue store and validation operations.
///
/// Display strings are the human-readable messages reported to API clients,
/// so they are kept short and free of internal detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Input failed a validation rule. The payload is the message to report.
    #[error("{0}")]
    Validation(String),

    /// An identifier could not be parsed as an integer.
    #[error("Invalid id")]
    InvalidId {
        /// The raw input that failed to parse.
        input: String,
    },

    /// No issue exists with the given ID.
    #[error("Issue not found")]
    NotFound(IssueId),

    /// A status value is not one of the known statuses.
    #[error("Invalid status")]
    InvalidStatus(String),
}

/// A specialized Result type for issue operations.
pub type Result<T> = std::result::Result<T, Error>;
