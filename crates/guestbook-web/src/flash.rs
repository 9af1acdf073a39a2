//! One-time notifications carried across the post/redirect/get cycle.
//!
//! A visitor is identified by a random session id in the `guestbook_session`
//! cookie. Pending messages live in memory and are removed when read.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "guestbook_session";

/// How long an unread flash is kept.
pub const FLASH_TTL: Duration = Duration::from_secs(10 * 60);

/// Upper bound on unread flashes held at once.
pub const MAX_PENDING_FLASHES: usize = 10_000;

/// Messages waiting to be shown on the next page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash {
    pub success: Option<String>,
    pub errors: Vec<String>,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: Some(message.into()),
            errors: Vec::new(),
        }
    }

    pub fn errors(errors: Vec<String>) -> Self {
        Self {
            success: None,
            errors,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.success.is_none() && self.errors.is_empty()
    }
}

/// In-process flash storage keyed by session id.
///
/// Visitors that never follow the redirect leave their flash behind, so
/// entries expire after `ttl` and the oldest are evicted beyond `max_pending`.
#[derive(Debug)]
pub struct FlashStore {
    pending: Mutex<HashMap<Uuid, Pending>>,
    ttl: Duration,
    max_pending: usize,
}

#[derive(Debug)]
struct Pending {
    flash: Flash,
    stored_at: Instant,
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::with_limits(FLASH_TTL, MAX_PENDING_FLASHES)
    }
}

impl FlashStore {
    pub fn with_limits(ttl: Duration, max_pending: usize) -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
            ttl,
            max_pending: max_pending.max(1),
        }
    }

    // Poisoning is ignored: insert and remove never leave the map partially updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Pending>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_expired(&self, pending: &Pending, now: Instant) -> bool {
        now.duration_since(pending.stored_at) >= self.ttl
    }

    /// Replace whatever is pending for `session`, dropping stale flashes first.
    pub fn set(&self, session: Uuid, flash: Flash) {
        let now = Instant::now();
        let mut pending = self.lock();
        pending.retain(|_, entry| !self.is_expired(entry, now));

        while pending.len() >= self.max_pending && !pending.contains_key(&session) {
            let oldest = pending
                .iter()
                .min_by_key(|(_, entry)| entry.stored_at)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    pending.remove(&id);
                }
                None => break,
            }
        }

        pending.insert(
            session,
            Pending {
                flash,
                stored_at: now,
            },
        );
    }

    /// Remove and return the pending flash for `session`, unless it expired.
    pub fn take(&self, session: Uuid) -> Option<Flash> {
        let entry = self.lock().remove(&session)?;
        if self.is_expired(&entry, Instant::now()) {
            return None;
        }
        Some(entry.flash)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the session id from the request's `Cookie` headers.
pub fn session_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value that binds `session` to the browser.
pub fn session_cookie(session: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, session)
}
