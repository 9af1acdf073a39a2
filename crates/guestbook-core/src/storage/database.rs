//! SQLite storage handle.
//!
//! A `Database` owns at most one SQLite connection. The connection is opened
//! on first use and kept for the lifetime of the handle. It sits behind a
//! mutex so one handle can be shared by a multi-threaded server.
//!
//! Every SQLite failure is logged here before being returned, so callers get
//! a uniform `GuestbookError::Sqlite` and the log keeps the failing statement.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use once_cell::sync::OnceCell;
use rusqlite::{Connection, OptionalExtension, Params, Row};

use crate::error::{GuestbookError, Result};

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

/// Lazily-connected, thread-safe SQLite handle.
#[derive(Debug)]
pub struct Database {
    location: Location,
    conn: OnceCell<Mutex<Connection>>,
}

impl Database {
    /// Create a handle for the database file at `path`.
    ///
    /// Nothing touches the filesystem until the first statement runs; at that
    /// point the parent directory is created if needed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            location: Location::File(path.into()),
            conn: OnceCell::new(),
        }
    }

    /// Create a handle for a private in-memory database (for testing).
    pub fn open_in_memory() -> Self {
        Self {
            location: Location::Memory,
            conn: OnceCell::new(),
        }
    }

    /// Path of the database file, or `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    /// Human-readable location for logs and CLI output.
    pub fn location(&self) -> String {
        match &self.location {
            Location::File(path) => path.display().to_string(),
            Location::Memory => ":memory:".to_string(),
        }
    }

    fn connect(&self) -> Result<Connection> {
        let conn = match &self.location {
            Location::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent).map_err(|err| {
                            tracing::error!(
                                path = %parent.display(),
                                error = %err,
                                "Failed to create database directory"
                            );
                            GuestbookError::from(err)
                        })?;
                    }
                }
                Connection::open(path)
            }
            Location::Memory => Connection::open_in_memory(),
        };

        conn.map_err(|err| {
            tracing::error!(location = %self.location(), error = %err, "Failed to open database");
            err.into()
        })
    }

    /// Lock the database connection, opening it first if needed.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        let cell = self
            .conn
            .get_or_try_init(|| self.connect().map(Mutex::new))?;
        cell.lock()
            .map_err(|_| GuestbookError::Storage("SQLite connection poisoned".to_string()))
    }

    fn sqlite_error(sql: &str, err: rusqlite::Error) -> GuestbookError {
        tracing::error!(statement = sql.trim(), error = %err, "Database error");
        err.into()
    }

    /// Run a single statement, returning the number of changed rows.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize> {
        let conn = self.lock_conn()?;
        conn.execute(sql, params)
            .map_err(|err| Self::sqlite_error(sql, err))
    }

    /// Run an INSERT and return the rowid it assigned.
    ///
    /// The rowid is read while the connection lock is still held, so a
    /// concurrent insert cannot be observed instead.
    pub fn insert<P: Params>(&self, sql: &str, params: P) -> Result<i64> {
        let conn = self.lock_conn()?;
        conn.execute(sql, params)
            .map_err(|err| Self::sqlite_error(sql, err))?;
        Ok(conn.last_insert_rowid())
    }

    /// Run several statements without parameters (schema setup).
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        let conn = self.lock_conn()?;
        conn.execute_batch(sql)
            .map_err(|err| Self::sqlite_error(sql, err))
    }

    /// Run a query and map every returned row.
    pub fn query<T, P, F>(&self, sql: &str, params: P, map_row: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.lock_conn()?;
        collect_rows(&conn, sql, params, map_row).map_err(|err| Self::sqlite_error(sql, err))
    }

    /// Run a query expected to return at most one row.
    pub fn query_optional<T, P, F>(&self, sql: &str, params: P, map_row: F) -> Result<Option<T>>
    where
        P: Params,
        F: FnOnce(&Row<'_>) -> rusqlite::Result<T>,
    {
        let conn = self.lock_conn()?;
        conn.query_row(sql, params, map_row)
            .optional()
            .map_err(|err| Self::sqlite_error(sql, err))
    }

    /// Check the schema catalog for a table named `name`.
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let found = self.query_optional(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get::<_, String>(0),
        )?;
        Ok(found.is_some())
    }
}

fn collect_rows<T, P, F>(conn: &Connection, sql: &str, params: P, map_row: F) -> rusqlite::Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;
    rows.collect()
}
