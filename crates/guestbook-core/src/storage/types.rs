//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted guestbook entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Auto-assigned row id
    pub id: i64,

    /// Name the visitor signed with
    pub visitor_name: String,

    /// Optional contact address, stored exactly as submitted
    pub email: Option<String>,

    /// Message body
    pub message: String,

    /// When this entry was created
    pub created_at: DateTime<Utc>,

    /// Set at insert; entries are never updated
    pub updated_at: DateTime<Utc>,
}

/// Builder for creating new entries.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub visitor_name: String,
    pub email: Option<String>,
    pub message: String,
}

impl NewEntry {
    pub fn new(visitor_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            visitor_name: visitor_name.into(),
            email: None,
            message: message.into(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
