//! Wire representations of entries

use financas_core::{CoreError, CoreResult, Entry, EntryStatus, EntryType, UserService};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry as sent and received on the wire; the user travels as its id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryDto {
    pub id: Option<i64>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "valor")]
    pub value: Option<Decimal>,
    #[serde(rename = "mes")]
    pub month: Option<i32>,
    #[serde(rename = "ano")]
    pub year: Option<i32>,
    #[serde(rename = "usuario")]
    pub user: Option<i64>,
    #[serde(rename = "tipo")]
    pub entry_type: Option<String>,
    pub status: Option<String>,
}

impl From<&Entry> for EntryDto {
    fn from(entry: &Entry) -> Self {
        Self {
            id: entry.id,
            description: Some(entry.description.clone()),
            value: Some(entry.value),
            month: Some(entry.month),
            year: Some(entry.year),
            user: Some(entry.user.id),
            entry_type: entry.entry_type.map(|t| t.name().to_string()),
            status: entry.status.map(|s| s.name().to_string()),
        }
    }
}

impl EntryDto {
    /// Build the domain entry, resolving the user through `users`.
    ///
    /// Fails with a business-rule error when the user does not exist or
    /// when the type or status name is unknown.
    pub async fn into_entry(self, users: &dyn UserService) -> CoreResult<Entry> {
        let user_id = self.user.ok_or_else(|| CoreError::rule("Provide a user."))?;
        let user = users
            .find_by_id(user_id)
            .await?
            .ok_or(CoreError::UserNotFound { id: user_id })?;

        let mut entry = Entry::new(
            self.description.unwrap_or_default(),
            self.value.unwrap_or_default(),
            self.month.unwrap_or_default(),
            self.year.unwrap_or_default(),
            user,
        );
        entry.id = self.id;
        if let Some(ref name) = self.entry_type {
            entry.entry_type = Some(name.parse::<EntryType>()?);
        }
        if let Some(ref name) = self.status {
            entry.status = Some(name.parse::<EntryStatus>()?);
        }
        Ok(entry)
    }
}

/// Body of the status update route
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: Option<String>,
}
