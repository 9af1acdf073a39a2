//! SQLite-backed entry repository.
//!
//! Owns a `Database` handle and implements `EntryRepository` on top of it.
//! Input is validated again here, so a front end that skips its own checks
//! still cannot persist an invalid entry.

mod row;

use chrono::{SecondsFormat, Utc};
use rusqlite::params;

use crate::error::{GuestbookError, Result};
use crate::storage::database::Database;
use crate::storage::schema::{self, MigrationOutcome, ENTRIES_TABLE};
use crate::storage::traits::EntryRepository;
use crate::storage::types::{Entry, NewEntry};
use crate::validation::validate;

use row::{EntryRow, ENTRY_COLUMNS};

/// Entry repository over a single SQLite table.
#[derive(Debug)]
pub struct SqliteEntryRepository {
    db: Database,
}

impl SqliteEntryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// The underlying storage handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Create the entries table if needed.
    pub fn migrate(&self) -> Result<MigrationOutcome> {
        schema::migrate(&self.db)
    }

    /// Microsecond precision keeps back-to-back inserts apart when sorting.
    fn timestamp_now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn rows_into_entries(rows: Vec<EntryRow>) -> Result<Vec<Entry>> {
        rows.into_iter().map(Entry::try_from).collect()
    }
}

impl EntryRepository for SqliteEntryRepository {
    fn create(&self, entry: &NewEntry) -> Result<i64> {
        let errors = validate(
            Some(&entry.visitor_name),
            entry.email.as_deref(),
            Some(&entry.message),
        );
        if !errors.is_empty() {
            return Err(GuestbookError::Validation(errors));
        }

        let now = Self::timestamp_now();
        let id = self
            .db
            .insert(
                r#"
                INSERT INTO guestbook_entries (visitor_name, email, message, created_at, updated_at)
                VALUES (?1, ?2, ?3, ?4, ?4)
                "#,
                params![entry.visitor_name, entry.email, entry.message, now],
            )
            .map_err(|err| {
                tracing::error!(error = %err, "Error creating entry");
                err
            })?;

        tracing::debug!(id, "Created guestbook entry");
        Ok(id)
    }

    // Rows may hold RFC 3339 or SQLite's default timestamp text, so compare
    // as julian days rather than as strings.
    fn list(&self) -> Result<Vec<Entry>> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY julianday(created_at) DESC, id DESC",
            ENTRY_COLUMNS, ENTRIES_TABLE
        );
        let rows = self.db.query(&query, [], EntryRow::from_row)?;
        Self::rows_into_entries(rows)
    }

    fn find(&self, id: i64) -> Result<Option<Entry>> {
        let query = format!("SELECT {} FROM {} WHERE id = ?1", ENTRY_COLUMNS, ENTRIES_TABLE);
        self.db
            .query_optional(&query, [id], EntryRow::from_row)?
            .map(Entry::try_from)
            .transpose()
    }

    fn ready(&self) -> bool {
        match self.db.table_exists(ENTRIES_TABLE) {
            Ok(exists) => exists,
            Err(err) => {
                tracing::warn!(error = %err, "Readiness check failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EMPTY_MESSAGE, EMPTY_NAME, INVALID_EMAIL};

    fn migrated_repo() -> SqliteEntryRepository {
        let repo = SqliteEntryRepository::new(Database::open_in_memory());
        repo.migrate().unwrap();
        repo
    }

    #[test]
    fn test_create_then_find_round_trip() {
        let repo = migrated_repo();
        let id = repo
            .create(&NewEntry::new("Test User", "This is a test message").with_email("test@example.com"))
            .unwrap();

        let entry = repo.find(id).unwrap().expect("entry should exist");
        assert_eq!(entry.id, id);
        assert_eq!(entry.visitor_name, "Test User");
        assert_eq!(entry.email.as_deref(), Some("test@example.com"));
        assert_eq!(entry.message, "This is a test message");
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_inputs_are_stored_untrimmed() {
        let repo = migrated_repo();
        let id = repo
            .create(&NewEntry::new("  Padded  ", "\tmessage\n").with_email(""))
            .unwrap();

        let entry = repo.find(id).unwrap().unwrap();
        assert_eq!(entry.visitor_name, "  Padded  ");
        assert_eq!(entry.message, "\tmessage\n");
        assert_eq!(entry.email.as_deref(), Some(""));
    }

    #[test]
    fn test_create_reports_every_failing_rule() {
        let repo = migrated_repo();
        let err = repo
            .create(&NewEntry::new("", "").with_email("bad"))
            .unwrap_err();

        assert_eq!(
            err.validation_messages().unwrap(),
            &[
                EMPTY_NAME.to_string(),
                EMPTY_MESSAGE.to_string(),
                INVALID_EMAIL.to_string()
            ]
        );
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_without_table_is_storage_error() {
        let repo = SqliteEntryRepository::new(Database::open_in_memory());
        let err = repo.create(&NewEntry::new("Alice", "Hello")).unwrap_err();
        assert!(matches!(err, GuestbookError::Sqlite { .. }));
    }

    #[test]
    fn test_list_newest_first() {
        let repo = migrated_repo();
        let first = repo.create(&NewEntry::new("First User", "First message")).unwrap();
        let second = repo.create(&NewEntry::new("Second User", "Second message")).unwrap();
        assert!(second > first);

        let entries = repo.list().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.visitor_name.as_str()).collect();
        assert_eq!(names, vec!["Second User", "First User"]);
    }

    #[test]
    fn test_list_ties_break_on_id() {
        let repo = migrated_repo();
        for name in ["a", "b", "c"] {
            repo.database()
                .execute(
                    "INSERT INTO guestbook_entries (visitor_name, message, created_at, updated_at) \
                     VALUES (?1, 'same time', '2024-01-01 00:00:00', '2024-01-01 00:00:00')",
                    [name],
                )
                .unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.visitor_name)
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_list_orders_mixed_timestamp_formats() {
        let repo = migrated_repo();
        let insert = "INSERT INTO guestbook_entries (visitor_name, message, created_at, updated_at) \
                      VALUES (?1, 'hello', ?2, ?2)";
        repo.database()
            .execute(insert, ["Late default format", "2024-05-01 23:59:00"])
            .unwrap();
        repo.database()
            .execute(insert, ["Early rfc3339", "2024-05-01T00:01:00.000000Z"])
            .unwrap();
        repo.database()
            .execute(insert, ["Next day rfc3339", "2024-05-02T00:00:30.000000Z"])
            .unwrap();

        let names: Vec<String> = repo
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.visitor_name)
            .collect();
        assert_eq!(
            names,
            vec!["Next day rfc3339", "Late default format", "Early rfc3339"]
        );
    }

    #[test]
    fn test_list_empty_store() {
        let repo = migrated_repo();
        assert!(repo.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_missing_is_none() {
        let repo = migrated_repo();
        assert!(repo.find(999).unwrap().is_none());
    }

    #[test]
    fn test_ready_tracks_table_existence() {
        let repo = SqliteEntryRepository::new(Database::open_in_memory());
        assert!(!repo.ready());
        repo.migrate().unwrap();
        assert!(repo.ready());
    }
}
