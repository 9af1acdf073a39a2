//! Error types for Guestbook core operations.
//!
//! Validation failures and storage failures are distinct variants so that
//! front ends can decide what to show a visitor without inspecting message text.

use thiserror::Error;

/// Result type alias for Guestbook operations.
pub type Result<T> = std::result::Result<T, GuestbookError>;

/// Core error type for Guestbook operations.
#[derive(Debug, Error)]
pub enum GuestbookError {
    /// One or more input rules failed, in rule order
    #[error("Validation error: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Storage handle error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GuestbookError {
    /// True for user-correctable input problems.
    pub fn is_validation(&self) -> bool {
        matches!(self, GuestbookError::Validation(_))
    }

    /// The validation messages, if this is a validation error.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            GuestbookError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}
