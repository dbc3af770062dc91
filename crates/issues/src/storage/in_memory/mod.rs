//! In-memory storage backend.
//!
//! This module provides an **ephemeral** store where all issues are held in RAM
//! and **lost when the process exits**. There is no persistence layer.
//!
//! # Architecture
//!
//! - `Vec<Issue>` keeps issues in creation order, which is also list order
//! - a monotonically increasing counter assigns ids starting at 1; ids of
//!   deleted issues are never handed out again
//!
//! Lookups are linear scans. Collections are expected to stay small.
//!
//! # Thread Safety
//!
//! State lives in `Arc<RwLock<InMemoryStoreInner>>`. Reads share the lock and
//! clone out what they return; `create`, `update`, and `delete` hold the write
//! lock for their whole read-modify-write sequence.

mod inner;
mod trait_impl;

use inner::InMemoryStoreInner;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory issue store.
///
/// Cloning produces another handle to the same underlying collection.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<InMemoryStoreInner>>,
}

impl InMemoryStore {
    /// Create a new, empty store whose first issue will get id 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore")
            .field("inner", &"<RwLock<InMemoryStoreInner>>")
            .finish()
    }
}
