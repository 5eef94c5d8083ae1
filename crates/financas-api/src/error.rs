//! Error types for financas-api
//!
//! Every handler failure ends up here; `ApiError::status` is the only
//! place where error kinds turn into status codes.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use financas_core::CoreError;
use thiserror::Error;

/// Message sent when a mutating route targets an unknown entry
pub const ENTRY_NOT_FOUND: &str = "Entry not found in the database.";

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    /// Absent entry on a read; answered with an empty 404
    #[error("Not found")]
    NotFound,

    /// Absent entry on a mutating route
    #[error("{0}")]
    Missing(String),

    /// Business rule, enum name or malformed request rejected
    #[error("{0}")]
    Validation(String),

    /// Anything else raised while delegating
    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    pub fn missing_entry() -> Self {
        ApiError::Missing(ENTRY_NOT_FOUND.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Missing(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unknown(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        log::debug!(target: "financas::api", "core error [{}]: {}", error.code(), error);
        match error {
            CoreError::EntryNotFound { .. } => ApiError::missing_entry(),
            CoreError::UserNotFound { .. } | CoreError::BusinessRule { .. } => {
                ApiError::Validation(error.to_string())
            }
            CoreError::Storage { .. } => ApiError::Unknown(error.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::NotFound => status.into_response(),
            other => {
                log::warn!(target: "financas::api", "request rejected ({}): {}", status.as_u16(), other);
                (status, other.to_string()).into_response()
            }
        }
    }
}
