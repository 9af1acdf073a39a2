//! Storage layer: SQLite handle, schema, and the entry repository.

pub mod database;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use database::Database;
pub use schema::{migrate, MigrationOutcome, ENTRIES_TABLE};
pub use sqlite::SqliteEntryRepository;
pub use traits::EntryRepository;
pub use types::{Entry, NewEntry};
