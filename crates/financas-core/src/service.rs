//! Collaborator interfaces used by the HTTP layer

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::CoreResult;
use crate::models::{Entry, EntryFilter, User};
use crate::types::EntryStatus;

/// Entry persistence and business rules
#[async_trait]
pub trait EntryService: Send + Sync {
    /// Look up an entry by id
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<Entry>>;

    /// All entries matching the filter
    async fn search(&self, filter: &EntryFilter) -> CoreResult<Vec<Entry>>;

    /// Validate and store a new entry, returning it with its assigned id
    async fn create(&self, entry: Entry) -> CoreResult<Entry>;

    /// Validate and replace an existing entry
    async fn update(&self, entry: Entry) -> CoreResult<Entry>;

    /// Remove an existing entry
    async fn delete(&self, entry: &Entry) -> CoreResult<()>;

    /// Change the status of an entry and store it
    async fn update_status(&self, mut entry: Entry, status: EntryStatus) -> CoreResult<Entry> {
        entry.status = Some(status);
        self.update(entry).await
    }
}

/// User lookup
#[async_trait]
pub trait UserService: Send + Sync {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>>;
}

/// Shared entry service reference
pub type EntryServiceRef = Arc<dyn EntryService>;

/// Shared user service reference
pub type UserServiceRef = Arc<dyn UserService>;
