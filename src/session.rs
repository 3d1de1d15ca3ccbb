//! In-memory session storage
//!
//! Holds each contact's dialogue progress between messages. Sessions live
//! for as long as the running service; nothing is written to disk.

mod locks;

pub use locks::{ContactGuard, ContactLocks};

use crate::runtime::SessionStore;
use crate::state_machine::Session;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Session store backed by a `HashMap`, with per-contact locking
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    locks: ContactLocks,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sessions(&self) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn lock_contact(&self, contact: &str) -> ContactGuard {
        self.locks.acquire(contact).await
    }

    async fn get_or_create(&self, contact: &str) -> Session {
        self.sessions()
            .entry(contact.to_string())
            .or_insert_with(|| {
                tracing::debug!(contact = %contact, "Starting new session");
                Session::new()
            })
            .clone()
    }

    async fn save(&self, contact: &str, session: &Session) {
        self.sessions().insert(contact.to_string(), session.clone());
    }

    async fn clear(&self, contact: &str) {
        if self.sessions().remove(contact).is_some() {
            tracing::debug!(contact = %contact, "Session cleared");
        }
    }

    async fn active_sessions(&self) -> usize {
        self.sessions().len()
    }
}
