//! HTTP API for the issues store.
//!
//! This crate exposes [`issues`] over a small REST surface built on axum.
//!
//! # Routes
//!
//! - `GET /health` - liveness check
//! - `POST /issues` - create an issue
//! - `GET /issues` - list issues in creation order
//! - `GET /issues/{id}` - show one issue
//! - `PUT /issues/{id}` - update title, description, or status
//! - `DELETE /issues/{id}` - delete an issue
//! - `GET /openapi.json` - OpenAPI 3.0 description of the above
//!
//! Errors are returned as `{"message": "..."}` with a 400, 404, or 500 status.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod server;

pub use config::Config;
pub use error::ApiError;
pub use server::{router, serve};
