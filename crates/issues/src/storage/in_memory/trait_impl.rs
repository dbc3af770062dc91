//! IssueStore trait implementation for in-memory storage.

use super::InMemoryStore;
use crate::domain::{Issue, IssueId, IssueUpdate, NewIssue};
use crate::error::Result;
use crate::storage::IssueStore;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[async_trait]
impl IssueStore for InMemoryStore {
    async fn create(&self, new_issue: NewIssue) -> Result<Issue> {
        let mut inner = self.inner.write().await;

        // === Phase 1: Build and validate (no mutations) ===
        let mut issue = Issue {
            id: IssueId::new(0),
            title: new_issue.title.trim().to_string(),
            description: new_issue.description.trim().to_string(),
            status: new_issue.status.unwrap_or_default(),
            created_at: Utc::now(),
        };
        issue.validate()?;

        // === Phase 2: Assign identity and store ===
        issue.id = inner.allocate_id();
        inner.issues.push(issue.clone());

        debug!(id = %issue.id, status = %issue.status, "Created issue");
        Ok(issue)
    }

    async fn list(&self) -> Result<Vec<Issue>> {
        let inner = self.inner.read().await;
        Ok(inner.issues.clone())
    }

    async fn get(&self, id: &str) -> Result<Issue> {
        let id = IssueId::parse(id)?;
        let inner = self.inner.read().await;
        let index = inner.position(id)?;
        Ok(inner.issues[index].clone())
    }

    async fn update(&self, id: &str, updates: IssueUpdate) -> Result<Issue> {
        let id = IssueId::parse(id)?;
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        // Apply to a copy so a rejected update leaves the stored issue intact
        let mut issue = inner.issues[index].clone();
        if let Some(title) = updates.title {
            issue.title = title.trim().to_string();
        }
        if let Some(description) = updates.description {
            issue.description = description.trim().to_string();
        }
        if let Some(status) = updates.status {
            issue.status = status;
        }

        issue.validate()?;

        inner.issues[index] = issue.clone();

        debug!(id = %issue.id, status = %issue.status, "Updated issue");
        Ok(issue)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let id = IssueId::parse(id)?;
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;

        // Vec::remove keeps the remaining issues in creation order
        inner.issues.remove(index);

        debug!(id = %id, "Deleted issue");
        Ok(())
    }
}
