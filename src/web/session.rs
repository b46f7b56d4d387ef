use crate::tools::env_args::retrieve_parsed_arg_value;
use cached::{Cached, TimedSizedCache};
use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use serde::Serialize;
use uuid::Uuid;

const CACHE_SIZE: usize = 100;
const SESSION_LIFESPAN_ARG: &str = "--session-lifespan";
/// Admins are logged out after ten minutes without any request.
const DEFAULT_SESSION_LIFESPAN: u64 = 10 * 60;

/// An admin logged onto the panel.
#[derive(Debug, Getters, Serialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    login: String,
    expires_at: DateTime<Utc>,
}

/// Open admin sessions, indexed by their token.
/// Only 100 sessions can be open at a time.
/// A session expires once it has been idle for the configured lifespan;
/// each access pushes its expiry back.
#[derive(Debug)]
pub struct SessionStorage {
    sessions: TimedSizedCache<String, AdminSession>,
    lifespan: u64,
}

impl SessionStorage {
    pub fn with_lifespan(lifespan: u64) -> Self {
        let sessions =
            TimedSizedCache::with_size_and_lifespan_and_refresh(CACHE_SIZE, lifespan, true);
        Self { sessions, lifespan }
    }

    pub fn from_args() -> Self {
        Self::with_lifespan(retrieve_parsed_arg_value(
            SESSION_LIFESPAN_ARG,
            DEFAULT_SESSION_LIFESPAN,
        ))
    }

    /// Open a new session and return its token.
    pub fn open(&mut self, login: String) -> (String, AdminSession) {
        let token = Uuid::new_v4().to_string();
        let session = AdminSession {
            login,
            expires_at: self.next_expiry(),
        };
        self.sessions.cache_set(token.clone(), session.clone());
        (token, session)
    }

    /// Retrieve a session that is still alive, and extend it.
    pub fn get(&mut self, token: &str) -> Option<AdminSession> {
        let expires_at = self.next_expiry();
        self.sessions.cache_get_mut(token).map(|session| {
            session.expires_at = expires_at;
            session.clone()
        })
    }

    pub fn close(&mut self, token: &str) -> Option<AdminSession> {
        self.sessions.cache_remove(token)
    }

    fn next_expiry(&self) -> DateTime<Utc> {
        i64::try_from(self.lifespan)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .and_then(|lifespan| Utc::now().checked_add_signed(lifespan))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl Default for SessionStorage {
    fn default() -> Self {
        Self::with_lifespan(DEFAULT_SESSION_LIFESPAN)
    }
}
