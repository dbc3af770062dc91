//! Core in-memory storage data structures.
//!
//! This module contains the inner storage structure that holds all data
//! and is wrapped in `Arc<RwLock<>>` for thread safety.

use crate::domain::{Issue, IssueId};
use crate::error::{Error, Result};

/// Inner storage structure (not thread-safe).
#[derive(Debug)]
pub(super) struct InMemoryStoreInner {
    /// Issues in creation order
    pub(super) issues: Vec<Issue>,

    /// Id handed to the next created issue
    next_id: i64,
}

impl Default for InMemoryStoreInner {
    fn default() -> Self {
        Self {
            issues: Vec::new(),
            next_id: 1,
        }
    }
}

impl InMemoryStoreInner {
    /// Reserve the next id. Ids are never reused, even after deletes.
    pub(super) fn allocate_id(&mut self) -> IssueId {
        let id = IssueId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Index of the issue with the given id.
    pub(super) fn position(&self, id: IssueId) -> Result<usize> {
        self.issues
            .iter()
            .position(|issue| issue.id == id)
            .ok_or(Error::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_id_is_monotonic() {
        let mut inner = InMemoryStoreInner::default();
        assert_eq!(inner.allocate_id(), IssueId::new(1));
        assert_eq!(inner.allocate_id(), IssueId::new(2));
        assert_eq!(inner.allocate_id(), IssueId::new(3));
    }

    #[test]
    fn test_position_of_missing_issue() {
        let inner = InMemoryStoreInner::default();
        assert_eq!(
            inner.position(IssueId::new(1)),
            Err(Error::NotFound(IssueId::new(1)))
        );
    }
}
