//! Entry routes - CRUD, search and status update
//!
//! Structure:
//! - api.rs: JSON API endpoints
//! - dto.rs: wire representations and conversions

pub mod api;
pub mod dto;

pub use api::{
    create_entry,
    delete_entry,
    get_entry,
    search_entries,
    update_entry,
    update_entry_status,
};

pub use dto::{EntryDto, StatusUpdateRequest};
