//! # Guestbook Core
//!
//! Core library for Guestbook - a small web guestbook backed by SQLite.
//!
//! This crate provides the domain logic, storage abstractions, and data models
//! independent of the HTTP and CLI front ends.
//!
//! ## Architecture
//!
//! - **validation**: Field rules for new entries (name, email, message)
//! - **storage**: SQLite handle, schema migration, and the entry repository
//! - **error**: Shared error type

pub mod error;
pub mod storage;
pub mod validation;

pub use error::{GuestbookError, Result};
pub use storage::{Database, Entry, EntryRepository, NewEntry, SqliteEntryRepository};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
