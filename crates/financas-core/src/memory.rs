//! In-memory service implementations
//!
//! `InMemoryEntryService` keeps entries in a map guarded by a lock and
//! applies the entry business rules before every write.
//! `InMemoryUserService` serves a fixed set of users.

use async_trait::async_trait;
use chrono::Utc;
use financas_config::SeedUser;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::models::{Entry, EntryFilter, User};
use crate::service::{EntryService, UserService};
use crate::types::EntryStatus;

/// Check the business rules every stored entry must satisfy
pub fn validate(entry: &Entry) -> CoreResult<()> {
    if entry.description.trim().is_empty() {
        return Err(CoreError::rule("Provide a valid description."));
    }
    if !(1..=12).contains(&entry.month) {
        return Err(CoreError::rule("Provide a valid month."));
    }
    if !(1000..=9999).contains(&entry.year) {
        return Err(CoreError::rule("Provide a valid year."));
    }
    if entry.user.id <= 0 {
        return Err(CoreError::rule("Provide a user."));
    }
    if entry.value <= Decimal::ZERO {
        return Err(CoreError::rule("Provide a valid value."));
    }
    if entry.entry_type.is_none() {
        return Err(CoreError::rule("Provide an entry type."));
    }
    Ok(())
}

/// Entry service backed by process memory
#[derive(Debug)]
pub struct InMemoryEntryService {
    entries: RwLock<BTreeMap<i64, Entry>>,
    next_id: AtomicI64,
}

impl Default for InMemoryEntryService {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEntryService {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> CoreResult<usize> {
        Ok(self.entries.read()?.len())
    }

    pub fn is_empty(&self) -> CoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn require_id(entry: &Entry) -> CoreResult<i64> {
    entry
        .id
        .ok_or_else(|| CoreError::rule("Entry id is required for this operation."))
}

#[async_trait]
impl EntryService for InMemoryEntryService {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<Entry>> {
        Ok(self.entries.read()?.get(&id).cloned())
    }

    async fn search(&self, filter: &EntryFilter) -> CoreResult<Vec<Entry>> {
        let entries = self.entries.read()?;
        Ok(entries
            .values()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect())
    }

    async fn create(&self, mut entry: Entry) -> CoreResult<Entry> {
        validate(&entry)?;

        let mut entries = self.entries.write()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entry.id = Some(id);
        entry.status = Some(EntryStatus::Pending);
        entry.created_at = Some(Utc::now().date_naive());

        entries.insert(id, entry.clone());
        log::info!("Entry {} created for user {}", id, entry.user.id);
        Ok(entry)
    }

    async fn update(&self, mut entry: Entry) -> CoreResult<Entry> {
        let id = require_id(&entry)?;
        validate(&entry)?;

        let mut entries = self.entries.write()?;
        let stored = entries
            .get_mut(&id)
            .ok_or(CoreError::EntryNotFound { id })?;
        if entry.created_at.is_none() {
            entry.created_at = stored.created_at;
        }
        *stored = entry.clone();
        log::info!("Entry {} updated", id);
        Ok(entry)
    }

    async fn delete(&self, entry: &Entry) -> CoreResult<()> {
        let id = require_id(entry)?;
        self.entries
            .write()?
            .remove(&id)
            .ok_or(CoreError::EntryNotFound { id })?;
        log::info!("Entry {} deleted", id);
        Ok(())
    }
}

/// User service serving a fixed set of users
#[derive(Debug, Default)]
pub struct InMemoryUserService {
    users: HashMap<i64, User>,
}

impl InMemoryUserService {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        }
    }

    /// Build from the users listed in the configuration
    pub fn from_seed(seed: &[SeedUser]) -> Self {
        Self::new(seed.iter().map(User::from))
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn find_by_id(&self, id: i64) -> CoreResult<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }
}
