use guestbook_core::EntryRepository;
use guestbook_web::routes::HealthResponse;

use crate::app::AppContext;
use crate::errors::CliError;

/// Print the same JSON body as `GET /health`; exit non-zero when not ready.
pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let repo = ctx.repository()?;
    let ready = repo.ready();
    let response = if ready {
        HealthResponse::ready()
    } else {
        HealthResponse::not_ready()
    };

    println!("{}", serde_json::to_string(&response)?);
    if !ready {
        CliError::not_ready("Entries table is not available; run `guestbook migrate`").exit();
    }
    Ok(())
}
