//! Schema setup for the entries table.

use crate::error::Result;

use super::database::Database;

/// Name of the single table holding guestbook entries.
pub const ENTRIES_TABLE: &str = "guestbook_entries";

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS guestbook_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    visitor_name TEXT NOT NULL,
    email TEXT,
    message TEXT NOT NULL,
    created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX IF NOT EXISTS idx_guestbook_entries_created_at
    ON guestbook_entries (created_at);
"#;

/// What `migrate` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The entries table was created by this call.
    Created,
    /// The entries table already existed; nothing changed.
    AlreadyPresent,
}

/// Create the entries table if it does not exist yet.
pub fn migrate(db: &Database) -> Result<MigrationOutcome> {
    if db.table_exists(ENTRIES_TABLE)? {
        tracing::debug!(location = %db.location(), "{} table already exists", ENTRIES_TABLE);
        return Ok(MigrationOutcome::AlreadyPresent);
    }

    db.execute_batch(SCHEMA)?;
    tracing::info!(location = %db.location(), "Created {} table", ENTRIES_TABLE);
    Ok(MigrationOutcome::Created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrate_is_idempotent() {
        let db = Database::open_in_memory();

        assert_eq!(migrate(&db).unwrap(), MigrationOutcome::Created);
        assert!(db.table_exists(ENTRIES_TABLE).unwrap());
        assert_eq!(migrate(&db).unwrap(), MigrationOutcome::AlreadyPresent);
    }

    #[test]
    fn test_schema_columns() {
        let db = Database::open_in_memory();
        migrate(&db).unwrap();

        let columns = db
            .query(
                "SELECT name FROM pragma_table_info(?1) ORDER BY cid",
                [ENTRIES_TABLE],
                |row| row.get::<_, String>(0),
            )
            .unwrap();
        assert_eq!(
            columns,
            vec!["id", "visitor_name", "email", "message", "created_at", "updated_at"]
        );
    }
}
