//! Output formatting for entries.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use guestbook_core::Entry;

const MESSAGE_PREVIEW_CHARS: usize = 60;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "id": entry.id,
        "visitor_name": entry.visitor_name,
        "email": entry.email,
        "message": entry.message,
        "created_at": entry.created_at,
        "updated_at": entry.updated_at,
    })
}

fn preview(message: &str) -> String {
    let single_line = message.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= MESSAGE_PREVIEW_CHARS {
        return single_line;
    }
    let truncated: String = single_line.chars().take(MESSAGE_PREVIEW_CHARS - 3).collect();
    format!("{}...", truncated)
}

pub fn entry_table(entries: &[Entry]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Created", "Name", "Email", "Message"]);
    for entry in entries {
        table.add_row(vec![
            entry.id.to_string(),
            entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            entry.visitor_name.clone(),
            entry.email.clone().unwrap_or_default(),
            preview(&entry.message),
        ]);
    }
    table
}

pub fn print_entry_list(entries: &[Entry], json: bool, quiet: bool) -> anyhow::Result<()> {
    if json {
        let values: Vec<_> = entries.iter().map(entry_json).collect();
        println!("{}", serde_json::to_string_pretty(&values)?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            println!("No entries yet.");
        }
        return Ok(());
    }

    if quiet {
        for entry in entries {
            println!("{}", entry.id);
        }
        return Ok(());
    }

    println!("{}", entry_table(entries));
    Ok(())
}

pub fn print_entry(entry: &Entry, json: bool, quiet: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&entry_json(entry))?);
        return Ok(());
    }

    if !quiet {
        println!("ID: {}", entry.id);
        println!("Name: {}", entry.visitor_name);
        if let Some(email) = entry.email.as_deref().filter(|e| !e.is_empty()) {
            println!("Email: {}", email);
        }
        println!("Created: {}", entry.created_at);
        println!();
    }
    println!("{}", entry.message);
    Ok(())
}
