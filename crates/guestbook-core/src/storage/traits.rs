//! Entry repository trait definition.
//!
//! The `EntryRepository` trait is the seam between the front ends (HTTP, CLI)
//! and the persistence backend.

use super::types::{Entry, NewEntry};
use crate::error::Result;

/// Data-access interface for guestbook entries.
///
/// Implementations must:
/// - Re-validate input on create, regardless of caller-side checks
/// - Use bound parameters for every statement
/// - Never mutate or delete existing entries
pub trait EntryRepository: Send + Sync {
    /// Insert a new entry.
    ///
    /// # Returns
    ///
    /// Returns the id assigned to the new entry.
    ///
    /// # Errors
    ///
    /// Returns `GuestbookError::Validation` with every failing rule's message
    /// (name, message, email order) if the input is invalid, or a storage
    /// error if the insert fails.
    fn create(&self, entry: &NewEntry) -> Result<i64>;

    /// List all entries, newest first.
    ///
    /// Entries sharing a `created_at` value are ordered by id, newest first.
    fn list(&self) -> Result<Vec<Entry>>;

    /// Get an entry by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn find(&self, id: i64) -> Result<Option<Entry>>;

    /// Whether the backing table exists and is reachable.
    ///
    /// Never fails; any connectivity problem reads as `false`.
    fn ready(&self) -> bool;
}
