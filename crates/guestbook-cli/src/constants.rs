//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Entry not found.
    pub const NOT_FOUND: i32 = 3;

    /// Entry failed validation.
    pub const INVALID_INPUT: i32 = 4;

    /// Database is missing or the entries table does not exist.
    pub const NOT_READY: i32 = 6;
}

/// Sample entries inserted by `guestbook seed`: (name, email, message).
pub const SAMPLE_ENTRIES: [(&str, &str, &str); 5] = [
    (
        "Alice Johnson",
        "alice@example.com",
        "This is a wonderful guestbook application! I love how clean the interface is.",
    ),
    (
        "Bob Smith",
        "",
        "Great work on this app. The design is modern and responsive.",
    ),
    (
        "Catherine Davis",
        "catherine@techblog.com",
        "I'm impressed with the implementation. Clean code architecture.",
    ),
    (
        "David Lee",
        "lee.dev@example.com",
        "Just wanted to say hello! This guestbook is working perfectly.",
    ),
    (
        "Emma Wilson",
        "emma@design.co",
        "Nice CSS styling! The purple theme gives it a professional look.",
    ),
];
