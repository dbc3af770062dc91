//! Issues - records, validation, and storage for a small issue tracker.
//!
//! This crate knows nothing about HTTP. It provides:
//!
//! - [`domain`]: the [`domain::Issue`] record and its typed inputs
//! - [`validation`]: checks that turn request payloads into typed inputs
//! - [`storage`]: the [`storage::IssueStore`] trait and its in-memory backend
//! - [`error`]: the error kinds every operation reports

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod storage;
pub mod validation;
