//! Guestbook CLI - run the web server and manage guestbook entries
//!
//! Thin front end over `guestbook-core` and `guestbook-web`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", err);
    }

    let ctx = AppContext::new(&cli);
    match &cli.command {
        Commands::Serve(args) => commands::handle_serve(&ctx, args).await,
        Commands::Migrate => commands::handle_migrate(&ctx),
        Commands::Add(args) => commands::handle_add(&ctx, args),
        Commands::List(args) => commands::handle_list(&ctx, args),
        Commands::Show(args) => commands::handle_show(&ctx, args),
        Commands::Seed => commands::handle_seed(&ctx),
        Commands::Check => commands::handle_check(&ctx),
    }
}
