//! Basic types for the entry model

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Entry type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Money coming in
    #[serde(rename = "RECEITA")]
    Income,
    /// Money going out
    #[serde(rename = "DESPESA")]
    Expense,
}

impl EntryType {
    /// Wire name of the type
    pub fn name(&self) -> &'static str {
        match self {
            EntryType::Income => "RECEITA",
            EntryType::Expense => "DESPESA",
        }
    }
}

/// Names are matched exactly, the way they travel on the wire.
impl std::str::FromStr for EntryType {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RECEITA" => Ok(EntryType::Income),
            "DESPESA" => Ok(EntryType::Expense),
            _ => Err(CoreError::BusinessRule {
                message: format!("Invalid entry type: {}", s),
            }),
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Registered, not yet settled
    #[serde(rename = "PENDENTE")]
    Pending,
    /// Paid or received
    #[serde(rename = "EFETIVADO")]
    Settled,
    /// Will not happen
    #[serde(rename = "CANCELADO")]
    Canceled,
}

impl EntryStatus {
    /// Wire name of the status
    pub fn name(&self) -> &'static str {
        match self {
            EntryStatus::Pending => "PENDENTE",
            EntryStatus::Settled => "EFETIVADO",
            EntryStatus::Canceled => "CANCELADO",
        }
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(EntryStatus::Pending),
            "EFETIVADO" => Ok(EntryStatus::Settled),
            "CANCELADO" => Ok(EntryStatus::Canceled),
            _ => Err(CoreError::BusinessRule {
                message: format!("Invalid entry status: {}", s),
            }),
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a status name, failing with a business-rule error on unknown names
pub fn parse_status(name: &str) -> Result<EntryStatus, CoreError> {
    name.parse()
}
