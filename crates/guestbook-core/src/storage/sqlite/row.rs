//! Entry row type for database queries.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{GuestbookError, Result};
use crate::storage::types::Entry;

/// Columns selected for every entry query, in `EntryRow::from_row` order.
pub const ENTRY_COLUMNS: &str = "id, visitor_name, email, message, created_at, updated_at";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub visitor_name: String,
    pub email: Option<String>,
    pub message: String,
    pub created_at: String,
    pub updated_at: String,
}

impl EntryRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            visitor_name: row.get(1)?,
            email: row.get(2)?,
            message: row.get(3)?,
            created_at: row.get(4)?,
            updated_at: row.get(5)?,
        })
    }
}

/// Parse a stored timestamp.
///
/// Rows written by the repository hold RFC 3339 strings. Rows that fell back
/// to the column default hold SQLite's `CURRENT_TIMESTAMP` format, in UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| GuestbookError::Storage(format!("Invalid timestamp {:?}: {}", value, e)))
}

impl TryFrom<EntryRow> for Entry {
    type Error = GuestbookError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let created_at = parse_timestamp(&row.created_at)?;
        let updated_at = parse_timestamp(&row.updated_at)?;

        Ok(Entry {
            id: row.id,
            visitor_name: row.visitor_name,
            email: row.email,
            message: row.message,
            created_at,
            updated_at,
        })
    }
}
