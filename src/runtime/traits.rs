//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the runtime with mock implementations.

use crate::db::{Database, Review};
use crate::session::ContactGuard;
use crate::state_machine::{NewReview, Session};
use async_trait::async_trait;
use std::sync::Arc;

/// Per-contact dialogue sessions.
///
/// None of these operations can fail. Callers hold the guard from
/// `lock_contact` across a whole read-advance-write sequence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Wait for exclusive access to one contact's session
    async fn lock_contact(&self, contact: &str) -> ContactGuard;

    /// Get the contact's session, creating a fresh one at `Init` if absent
    async fn get_or_create(&self, contact: &str) -> Session;

    /// Replace the contact's session
    async fn save(&self, contact: &str, session: &Session);

    /// Remove the contact's session; no-op if absent
    async fn clear(&self, contact: &str);

    /// Number of sessions currently held
    async fn active_sessions(&self) -> usize;
}

/// Storage for completed reviews
#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Persist a review atomically
    async fn create_review(&self, review: &NewReview) -> Result<Review, String>;

    /// Reviews newest first
    async fn list_reviews(&self, skip: u32, limit: u32) -> Result<Vec<Review>, String>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn lock_contact(&self, contact: &str) -> ContactGuard {
        (**self).lock_contact(contact).await
    }

    async fn get_or_create(&self, contact: &str) -> Session {
        (**self).get_or_create(contact).await
    }

    async fn save(&self, contact: &str, session: &Session) {
        (**self).save(contact, session).await;
    }

    async fn clear(&self, contact: &str) {
        (**self).clear(contact).await;
    }

    async fn active_sessions(&self) -> usize {
        (**self).active_sessions().await
    }
}

#[async_trait]
impl<T: ReviewStore + ?Sized> ReviewStore for Arc<T> {
    async fn create_review(&self, review: &NewReview) -> Result<Review, String> {
        (**self).create_review(review).await
    }

    async fn list_reviews(&self, skip: u32, limit: u32) -> Result<Vec<Review>, String> {
        (**self).list_reviews(skip, limit).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Adapter to use Database as a `ReviewStore`
#[derive(Clone)]
pub struct DatabaseStorage {
    db: Database,
}

impl DatabaseStorage {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReviewStore for DatabaseStorage {
    async fn create_review(&self, review: &NewReview) -> Result<Review, String> {
        self.db.create_review(review).map_err(|e| e.to_string())
    }

    async fn list_reviews(&self, skip: u32, limit: u32) -> Result<Vec<Review>, String> {
        self.db.list_reviews(skip, limit).map_err(|e| e.to_string())
    }
}
