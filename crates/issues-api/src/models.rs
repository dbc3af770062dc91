//! HTTP response models.
//!
//! Issues themselves are serialized straight from [`issues::domain::Issue`];
//! these are the remaining bodies the API returns.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthResponse {
    /// Always `true` while the server is accepting requests.
    pub ok: bool,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    /// Human-readable description of what went wrong.
    pub message: String,
}
