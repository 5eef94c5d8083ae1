//! Error types for financas-core
//!
//! Business-rule violations carry a human-readable message that is sent
//! back to clients as-is; the other variants describe lookups and storage
//! failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Entry not found
    EntryNotFound,
    /// User not found
    UserNotFound,
    /// Business rule violated
    BusinessRule,
    /// Storage failure
    StorageError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::EntryNotFound => write!(f, "ENTRY_NOT_FOUND"),
            ErrorCode::UserNotFound => write!(f, "USER_NOT_FOUND"),
            ErrorCode::BusinessRule => write!(f, "BUSINESS_RULE"),
            ErrorCode::StorageError => write!(f, "STORAGE_ERROR"),
        }
    }
}

/// Main error type for financas-core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Entry not found: {id}")]
    EntryNotFound { id: i64 },

    #[error("User not found for the given id: {id}")]
    UserNotFound { id: i64 },

    #[error("{message}")]
    BusinessRule { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl CoreError {
    /// Shorthand for a business-rule violation
    pub fn rule(message: impl Into<String>) -> Self {
        CoreError::BusinessRule {
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EntryNotFound { .. } => ErrorCode::EntryNotFound,
            CoreError::UserNotFound { .. } => ErrorCode::UserNotFound,
            CoreError::BusinessRule { .. } => ErrorCode::BusinessRule,
            CoreError::Storage { .. } => ErrorCode::StorageError,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

impl<T> From<std::sync::PoisonError<T>> for CoreError {
    fn from(error: std::sync::PoisonError<T>) -> Self {
        CoreError::Storage {
            message: error.to_string(),
        }
    }
}

// ==================== Tests ====================
