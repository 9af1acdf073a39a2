use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use guestbook_core::storage::{Database, EntryRepository, MigrationOutcome, NewEntry, SqliteEntryRepository};
use guestbook_core::validation::validate;

struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be available")
            .as_nanos();
        let filename = format!("{}_{}_{}.db", prefix, std::process::id(), nanos);
        let path = std::env::temp_dir().join(filename);
        Self { path }
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn test_entries_survive_reopen() {
    let temp = TempFile::new("guestbook_reopen");

    let id = {
        let repo = SqliteEntryRepository::new(Database::open(&temp.path));
        assert_eq!(repo.migrate().expect("migrate should succeed"), MigrationOutcome::Created);
        repo.create(&NewEntry::new("Alice Johnson", "Wonderful guestbook!").with_email("alice@example.com"))
            .expect("create should succeed")
    };

    let repo = SqliteEntryRepository::new(Database::open(&temp.path));
    assert!(repo.ready());
    assert_eq!(repo.migrate().expect("migrate should succeed"), MigrationOutcome::AlreadyPresent);

    let entry = repo.find(id).expect("find should succeed").expect("entry should exist");
    assert_eq!(entry.visitor_name, "Alice Johnson");
    assert_eq!(entry.email.as_deref(), Some("alice@example.com"));
    assert_eq!(entry.message, "Wonderful guestbook!");
}

#[test]
fn test_ready_false_before_migration() {
    let temp = TempFile::new("guestbook_ready");
    let repo = SqliteEntryRepository::new(Database::open(&temp.path));

    assert!(!repo.ready());
    repo.migrate().expect("migrate should succeed");
    assert!(repo.ready());
}

#[test]
fn test_validator_and_repository_agree() {
    let temp = TempFile::new("guestbook_agree");
    let repo = SqliteEntryRepository::new(Database::open(&temp.path));
    repo.migrate().expect("migrate should succeed");

    let cases = [
        ("John Doe", Some("john@example.com"), "Great guestbook!"),
        ("", Some("test@example.com"), "Test message"),
        ("John Doe", Some("invalid-email"), "Test message"),
        ("John Doe", None, ""),
        ("", Some("bad"), ""),
    ];

    for (name, email, message) in cases {
        let expected = validate(Some(name), email, Some(message));
        let mut entry = NewEntry::new(name, message);
        entry.email = email.map(str::to_string);

        match repo.create(&entry) {
            Ok(_) => assert!(expected.is_empty(), "{:?} should have been rejected", entry),
            Err(err) => assert_eq!(err.validation_messages(), Some(expected.as_slice())),
        }
    }

    assert_eq!(repo.list().expect("list should succeed").len(), 1);
}

#[test]
fn test_shared_repository_across_threads() {
    let temp = TempFile::new("guestbook_threads");
    let repo = Arc::new(SqliteEntryRepository::new(Database::open(&temp.path)));
    repo.migrate().expect("migrate should succeed");

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                repo.create(&NewEntry::new(format!("Visitor {}", n), "Hello from a thread"))
                    .expect("create should succeed")
            })
        })
        .collect();

    let mut ids: Vec<i64> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread should not panic"))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(repo.list().expect("list should succeed").len(), 4);
}
