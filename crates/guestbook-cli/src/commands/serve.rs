use std::net::SocketAddr;
use std::sync::Arc;

use guestbook_core::EntryRepository;
use guestbook_web::{AppState, ServerConfig};

use crate::app::AppContext;
use crate::cli::ServeArgs;

pub async fn handle_serve(ctx: &AppContext<'_>, args: &ServeArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let bind = args.bind.unwrap_or(config.server.bind);
    let port = args.port.unwrap_or(config.server.port);

    let repo = ctx.repository()?;
    if config.server.auto_migrate && !args.no_migrate {
        let outcome = repo.migrate()?;
        tracing::info!(?outcome, "Schema checked");
    } else if !repo.ready() {
        tracing::warn!("Entries table is missing; run `guestbook migrate` before accepting posts");
    }

    let state = AppState::new(repo as Arc<dyn EntryRepository>);
    let server_config = ServerConfig {
        bind_addr: SocketAddr::new(bind, port),
    };
    guestbook_web::serve(server_config, state).await?;
    Ok(())
}
