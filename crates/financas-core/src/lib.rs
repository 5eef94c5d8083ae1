//! Core entry model and business logic
//!
//! - types: entry type and status enums with their wire names
//! - models: `Entry`, `User` and the search `EntryFilter`
//! - service: collaborator traits consumed by the HTTP layer
//! - memory: in-memory implementations of those traits

pub mod error;
pub mod memory;
pub mod models;
pub mod service;
pub mod types;

pub use error::{CoreError, CoreResult, ErrorCode};
pub use memory::{InMemoryEntryService, InMemoryUserService};
pub use models::{Entry, EntryFilter, User};
pub use service::{EntryService, EntryServiceRef, UserService, UserServiceRef};
pub use types::{parse_status, EntryStatus, EntryType};
