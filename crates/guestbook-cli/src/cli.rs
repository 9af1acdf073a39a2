use std::net::IpAddr;

use clap::{Args, Parser, Subcommand};

use guestbook_core::VERSION;

/// Guestbook - a small web guestbook backed by SQLite
#[derive(Parser)]
#[command(name = "guestbook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(short, long, global = true, env = "GUESTBOOK_DB")]
    pub db: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "GUESTBOOK_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Debug logging (unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve(ServeArgs),

    /// Create the entries table if it does not exist
    Migrate,

    /// Add an entry from the command line
    Add(AddArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Insert a handful of sample entries
    Seed,

    /// Report database readiness as JSON
    Check,
}

/// Arguments for the `serve` command
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long)]
    pub bind: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Skip creating the entries table on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Visitor name
    #[arg(long)]
    pub name: String,

    /// Visitor email (optional)
    #[arg(long)]
    pub email: Option<String>,

    /// Message body
    #[arg(long)]
    pub message: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
