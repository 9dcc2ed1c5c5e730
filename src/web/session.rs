//! Cookie-identified sessions. Each session owns its own `SessionState`.
//!
//! Only ids minted here are ever stored. Idle sessions expire after a TTL
//! and the map never holds more than `capacity` entries.

use crate::core::submit::SessionState;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use dashmap::DashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "petlog_session";

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(12 * 60 * 60);
pub const DEFAULT_SESSION_CAPACITY: usize = 1024;

#[derive(Debug)]
struct Entry {
    state: SessionState,
    last_seen: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: DashMap<Uuid, Entry>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_SESSION_CAPACITY)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Session for the request cookie, or a freshly issued one (`true` = new,
    /// the caller must send the cookie). Unknown or expired ids get a new id.
    pub fn resolve(&self, headers: &HeaderMap) -> (Uuid, bool) {
        let now = Instant::now();

        if let Some(id) = session_id_from_headers(headers)
            && let Some(mut entry) = self.sessions.get_mut(&id)
            && now.duration_since(entry.last_seen) <= self.ttl
        {
            entry.last_seen = now;
            return (id, false);
        }

        (self.issue(now), true)
    }

    fn issue(&self, now: Instant) -> Uuid {
        self.evict(now);
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            Entry {
                state: SessionState::default(),
                last_seen: now,
            },
        );
        id
    }

    /// Drop expired sessions, then the least recently seen ones until there
    /// is room for one more.
    fn evict(&self, now: Instant) {
        self.sessions
            .retain(|_, e| now.duration_since(e.last_seen) <= self.ttl);

        while self.sessions.len() >= self.capacity {
            let oldest = self
                .sessions
                .iter()
                .min_by_key(|e| e.value().last_seen)
                .map(|e| *e.key());
            match oldest {
                Some(id) => {
                    self.sessions.remove(&id);
                }
                None => break,
            }
        }
    }

    pub fn get(&self, id: &Uuid) -> SessionState {
        self.sessions
            .get(id)
            .map(|e| e.value().state.clone())
            .unwrap_or_default()
    }

    /// Store `state` for a live session; evicted sessions stay gone.
    pub fn put(&self, id: Uuid, state: SessionState) {
        if let Some(mut entry) = self.sessions.get_mut(&id) {
            entry.state = state;
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

pub fn session_cookie(id: &Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
