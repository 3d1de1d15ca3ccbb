//! Per-contact mutual exclusion
//!
//! One async mutex per contact identifier, created on demand. An entry is
//! dropped from the table when the last guard or waiter for it goes away,
//! so the table only holds contacts with a message in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OwnedMutexGuard;

type LockTable = HashMap<String, Arc<tokio::sync::Mutex<()>>>;

/// Table of per-contact locks
#[derive(Clone, Default)]
pub struct ContactLocks {
    table: Arc<Mutex<LockTable>>,
}

impl ContactLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `contact`.
    ///
    /// Guards for different contacts never contend with each other.
    pub async fn acquire(&self, contact: &str) -> ContactGuard {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(table.entry(contact.to_string()).or_default())
        };

        let guard = lock.lock_owned().await;

        ContactGuard {
            contact: contact.to_string(),
            table: Arc::clone(&self.table),
            guard: Some(guard),
        }
    }

    /// Number of contacts currently locked or waited on
    #[allow(dead_code)] // Used in tests
    pub fn active(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Exclusive access to one contact's session, released on drop
pub struct ContactGuard {
    contact: String,
    table: Arc<Mutex<LockTable>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl ContactGuard {
    #[allow(dead_code)] // API completeness
    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl std::fmt::Debug for ContactGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactGuard")
            .field("contact", &self.contact)
            .finish_non_exhaustive()
    }
}

impl Drop for ContactGuard {
    fn drop(&mut self) {
        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        // Clones are only taken under the table lock, so a count of two
        // (the table's and ours) means nobody else is waiting.
        let idle = table
            .get(&self.contact)
            .is_some_and(|lock| Arc::strong_count(lock) == 2);
        if idle {
            table.remove(&self.contact);
        }
        self.guard.take();
    }
}
