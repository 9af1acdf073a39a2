use guestbook_core::{EntryRepository, GuestbookError, NewEntry};

use crate::app::AppContext;
use crate::cli::{AddArgs, ListArgs, ShowArgs};
use crate::errors::CliError;
use crate::output::{entry_json, print_entry, print_entry_list};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    let new_entry = NewEntry {
        visitor_name: args.name.clone(),
        email: args.email.clone(),
        message: args.message.clone(),
    };

    let id = match repo.create(&new_entry) {
        Ok(id) => id,
        Err(GuestbookError::Validation(messages)) => CliError::invalid_input(&messages).exit(),
        Err(err) => return Err(err.into()),
    };

    if args.json {
        let entry = repo
            .find(id)?
            .ok_or_else(|| anyhow::anyhow!("Entry {} vanished after insert", id))?;
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry))?);
    } else if ctx.quiet() {
        println!("{}", id);
    } else {
        println!("Added entry {}", id);
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    let entries = repo.list()?;
    print_entry_list(&entries, args.json, ctx.quiet())
}

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    match repo.find(args.id)? {
        Some(entry) => print_entry(&entry, args.json, ctx.quiet()),
        None => CliError::not_found(format!("Entry {} not found", args.id)).exit(),
    }
}
