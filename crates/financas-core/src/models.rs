//! Core data models for entries and users

use chrono::NaiveDate;
use financas_config::SeedUser;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{EntryStatus, EntryType};

/// Owner of entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
}

impl From<&SeedUser> for User {
    fn from(seed: &SeedUser) -> Self {
        Self {
            id: seed.id,
            name: seed.name.clone(),
            email: seed.email.clone(),
        }
    }
}

/// A financial entry (income or expense) of one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Server-assigned identifier
    pub id: Option<i64>,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub value: Decimal,
    /// 1 to 12
    #[serde(rename = "mes")]
    pub month: i32,
    #[serde(rename = "ano")]
    pub year: i32,
    #[serde(rename = "tipo")]
    pub entry_type: Option<EntryType>,
    pub status: Option<EntryStatus>,
    #[serde(rename = "usuario")]
    pub user: User,
    /// Registration date, stamped on creation
    #[serde(rename = "dataCadastro")]
    pub created_at: Option<NaiveDate>,
}

impl Entry {
    /// Create an entry without id, type or status
    pub fn new(description: impl Into<String>, value: Decimal, month: i32, year: i32, user: User) -> Self {
        Self {
            id: None,
            description: description.into(),
            value,
            month,
            year,
            entry_type: None,
            status: None,
            user,
            created_at: None,
        }
    }

    pub fn with_type(mut self, entry_type: EntryType) -> Self {
        self.entry_type = Some(entry_type);
        self
    }

    pub fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Search criteria; `None` fields do not constrain the result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFilter {
    /// Case-insensitive substring of the description
    pub description: Option<String>,
    pub entry_type: Option<EntryType>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub user_id: Option<i64>,
}

impl EntryFilter {
    /// Filter on the entries of one user
    pub fn for_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Check if an entry satisfies every set criterion
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(ref description) = self.description {
            let needle = description.to_lowercase();
            if !entry.description.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if self.entry_type.is_some() && self.entry_type != entry.entry_type {
            return false;
        }
        if self.month.map_or(false, |m| m != entry.month) {
            return false;
        }
        if self.year.map_or(false, |y| y != entry.year) {
            return false;
        }
        self.user_id.map_or(true, |id| id == entry.user.id)
    }
}
