//! Route modules for the API server
//!
//! - entries: financial entries (lancamentos)

pub mod entries;
