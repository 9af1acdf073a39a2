//! Tracing setup for the guestbook binary.
//!
//! `RUST_LOG` takes precedence; otherwise `--verbose` selects debug and the
//! default is info. Logs go to stderr so command output stays clean.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
