//! Application context for the Guestbook CLI.
//!
//! Combines CLI arguments with a lazily-loaded config file and a lazily
//! constructed repository, so each command only pays for what it uses.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use guestbook_core::{Database, SqliteEntryRepository};

use crate::cli::Cli;
use crate::config::{default_database_path, load_config, GuestbookConfig};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<GuestbookConfig>,
    repository: OnceCell<Arc<SqliteEntryRepository>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            repository: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&GuestbookConfig> {
        self.config
            .get_or_try_init(|| load_config(self.cli.config.as_deref()))
    }

    /// Resolve the database path: `--db`/`GUESTBOOK_DB`, then config, then the XDG default.
    pub fn database_path(&self) -> anyhow::Result<PathBuf> {
        if let Some(path) = &self.cli.db {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.config()?.database.path {
            return Ok(PathBuf::from(path));
        }
        default_database_path()
    }

    /// The entry repository for the resolved database.
    pub fn repository(&self) -> anyhow::Result<Arc<SqliteEntryRepository>> {
        let repo = self.repository.get_or_try_init(|| -> anyhow::Result<_> {
            let path = self.database_path()?;
            tracing::debug!(path = %path.display(), "Using database");
            Ok(Arc::new(SqliteEntryRepository::new(Database::open(path))))
        })?;
        Ok(Arc::clone(repo))
    }
}
