//! Entry field validation.
//!
//! Rules are checked in a fixed order (name, message, email) and every
//! failing rule contributes one message, so the result can be shown to a
//! visitor as a literal list.

use once_cell::sync::Lazy;
use regex::Regex;

pub const EMPTY_NAME: &str = "Visitor name cannot be empty";
pub const EMPTY_MESSAGE: &str = "Message cannot be empty";
pub const INVALID_EMAIL: &str = "Invalid email format";

/// local-part@domain.tld, subdomains allowed, case-insensitive.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").expect("email pattern is valid")
});

/// Check whether `email` looks like a deliverable address.
///
/// This rejects obviously malformed input; it does not guarantee the
/// mailbox exists. Empty or whitespace-only input is never valid.
pub fn is_valid_email(email: &str) -> bool {
    if email.trim().is_empty() {
        return false;
    }
    EMAIL_PATTERN.is_match(email)
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validate the three entry fields, returning every failing rule's message.
///
/// An empty vector means the input may be persisted. Absent values are
/// treated as empty strings. The email is only checked when non-empty.
pub fn validate(visitor_name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Vec<String> {
    let mut errors = Vec::new();

    if is_blank(visitor_name) {
        errors.push(EMPTY_NAME.to_string());
    }
    if is_blank(message) {
        errors.push(EMPTY_MESSAGE.to_string());
    }
    if let Some(email) = email {
        if !email.is_empty() && !is_valid_email(email) {
            errors.push(INVALID_EMAIL.to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry_with_all_fields() {
        let errors = validate(Some("John Doe"), Some("john@example.com"), Some("Great guestbook!"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_valid_entry_without_email() {
        assert!(validate(Some("Jane Doe"), Some(""), Some("Love this guestbook!")).is_empty());
        assert!(validate(Some("Jane Doe"), None, Some("Love this guestbook!")).is_empty());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate(Some(""), Some("ok@example.com"), Some("hi")),
            vec![EMPTY_NAME.to_string()]
        );
    }

    #[test]
    fn test_whitespace_only_fields_are_empty() {
        assert_eq!(
            validate(Some("   "), None, Some("\t\n")),
            vec![EMPTY_NAME.to_string(), EMPTY_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(
            validate(Some("John Doe"), Some("john@example.com"), None),
            vec![EMPTY_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_invalid_email_only() {
        assert_eq!(
            validate(Some("Bob"), Some("not-an-email"), Some("hi")),
            vec![INVALID_EMAIL.to_string()]
        );
    }

    #[test]
    fn test_all_rules_fail_in_order() {
        assert_eq!(
            validate(Some(""), Some("bad"), Some("")),
            vec![
                "Visitor name cannot be empty".to_string(),
                "Message cannot be empty".to_string(),
                "Invalid email format".to_string(),
            ]
        );
    }

    #[test]
    fn test_whitespace_email_is_checked() {
        assert_eq!(
            validate(Some("Bob"), Some(" "), Some("hi")),
            vec![INVALID_EMAIL.to_string()]
        );
    }

    #[test]
    fn test_valid_email_formats() {
        for email in [
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.co.uk",
            "user_name@example-domain.com",
            "user.name@example.co.uk",
            "USER@EXAMPLE.COM",
        ] {
            assert!(is_valid_email(email), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_email_formats() {
        for email in [
            "invalid",
            "invalid@",
            "@example.com",
            "user@.com",
            "user@example",
            "user@example.c",
            "user@example.com\n",
            "",
            "   ",
        ] {
            assert!(!is_valid_email(email), "{:?} should be invalid", email);
        }
    }
}
