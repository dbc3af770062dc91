//! Storage abstraction layer for issues.
//!
//! This module provides the [`IssueStore`] trait and the in-memory backend
//! that implements it. Stores are plain values: create one per process (or per
//! test) and share it behind an `Arc`.
//!
//! # Identifiers
//!
//! Lookup, update, and delete take the caller-supplied identifier as raw text
//! and parse it themselves, so every operation reports the same two failure
//! kinds: `Error::InvalidId` when the text is not an integer and
//! `Error::NotFound` when no issue has that id.
//!
//! # Example
//!
//! ```
//! use issues::domain::NewIssue;
//! use issues::storage::new_in_memory_store;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> issues::error::Result<()> {
//!     let store = new_in_memory_store();
//!
//!     let issue = store
//!         .create(NewIssue {
//!             title: "Login not working".to_string(),
//!             description: "Button does nothing".to_string(),
//!             status: None,
//!         })
//!         .await?;
//!
//!     let fetched = store.get(&issue.id.to_string()).await?;
//!     assert_eq!(fetched, issue);
//!     Ok(())
//! }
//! ```

use crate::domain::{Issue, IssueUpdate, NewIssue};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

// Storage backend implementations
pub mod in_memory;

pub use in_memory::InMemoryStore;

/// Core storage trait for issue management.
///
/// Implementations must be `Send + Sync` so a single store can be shared by
/// concurrent request handlers. Mutating operations must apply their
/// read-modify-write sequence atomically with respect to other callers.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Create a new issue.
    ///
    /// Trims title and description, defaults the status to `open`, assigns the
    /// next id, and stamps the creation time.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if the trimmed issue breaks an invariant.
    /// Input that went through [`crate::validation::validate_create`] never does.
    async fn create(&self, issue: NewIssue) -> Result<Issue>;

    /// List every issue in creation order.
    ///
    /// The returned vector is a copy; changing it does not affect the store.
    async fn list(&self) -> Result<Vec<Issue>>;

    /// Get an issue by its (unparsed) id.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidId` if `id` is not an integer
    /// - `Error::NotFound` if no issue has that id
    async fn get(&self, id: &str) -> Result<Issue>;

    /// Update an existing issue.
    ///
    /// Only fields present in `updates` are modified. The result is checked
    /// before it is committed, so a failed update leaves the issue untouched.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidId` / `Error::NotFound` as for [`IssueStore::get`]
    /// - `Error::Validation` if the updated issue would break an invariant
    async fn update(&self, id: &str, updates: IssueUpdate) -> Result<Issue>;

    /// Delete an issue permanently.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidId` if `id` is not an integer
    /// - `Error::NotFound` if no issue has that id
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Shared handle to a store, as held by request handlers.
pub type SharedStore = Arc<dyn IssueStore>;

/// Create a new, empty in-memory store.
pub fn new_in_memory_store() -> SharedStore {
    Arc::new(InMemoryStore::new())
}
