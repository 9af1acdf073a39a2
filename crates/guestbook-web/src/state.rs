//! Application state shared across handlers

use std::sync::Arc;

use guestbook_core::EntryRepository;

use crate::flash::FlashStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    repo: Arc<dyn EntryRepository>,
    flash: FlashStore,
}

impl AppState {
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        Self::with_flash_store(repo, FlashStore::default())
    }

    pub fn with_flash_store(repo: Arc<dyn EntryRepository>, flash: FlashStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { repo, flash }),
        }
    }

    pub fn repo(&self) -> &dyn EntryRepository {
        self.inner.repo.as_ref()
    }

    pub fn flash(&self) -> &FlashStore {
        &self.inner.flash
    }
}
