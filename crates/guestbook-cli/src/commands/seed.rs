use guestbook_core::{EntryRepository, NewEntry};

use crate::app::AppContext;
use crate::constants::SAMPLE_ENTRIES;

/// Insert the sample entries one by one; a failed insert is reported and skipped.
pub fn handle_seed(ctx: &AppContext) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    let quiet = ctx.quiet();

    if !quiet {
        println!("Adding sample guestbook entries...");
    }

    let mut added = 0;
    for (index, (name, email, message)) in SAMPLE_ENTRIES.iter().enumerate() {
        let mut new_entry = NewEntry::new(*name, *message);
        if !email.is_empty() {
            new_entry = new_entry.with_email(*email);
        }

        match repo.create(&new_entry) {
            Ok(id) => {
                added += 1;
                if !quiet {
                    println!("{}. Added: {} (ID: {})", index + 1, name, id);
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, name = %name, "Failed to add sample entry");
                if !quiet {
                    println!("{}. Failed: {} ({})", index + 1, name, err);
                }
            }
        }
    }

    let total = repo.list()?.len();
    if !quiet {
        println!(
            "Successfully added {} out of {} sample records.",
            added,
            SAMPLE_ENTRIES.len()
        );
        println!("Total entries now: {}", total);
    }
    Ok(())
}
