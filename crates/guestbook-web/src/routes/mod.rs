//! Route handlers

mod entries;
mod health;
mod index;

pub use entries::{create_entry, EntryForm, STORAGE_FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use health::{health, HealthResponse};
pub use index::index;
