use guestbook_core::storage::{MigrationOutcome, ENTRIES_TABLE};

use crate::app::AppContext;

pub fn handle_migrate(ctx: &AppContext) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    let outcome = repo.migrate()?;

    if !ctx.quiet() {
        match outcome {
            MigrationOutcome::Created => {
                println!("Migration complete: {} table created", ENTRIES_TABLE)
            }
            MigrationOutcome::AlreadyPresent => println!("{} table already exists", ENTRIES_TABLE),
        }
    }
    Ok(())
}
