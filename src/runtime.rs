//! Runtime for executing review conversations
//!
//! Glue between the inbound webhook, the session store, the pure state
//! machine and review persistence.

mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::ConversationRuntime;
pub use traits::*;

use std::sync::Arc;
use thiserror::Error;

/// Runtime over trait objects, so the stores can be swapped at startup or in tests
pub type SharedRuntime = ConversationRuntime<Arc<dyn SessionStore>, Arc<dyn ReviewStore>>;

/// Reply sent when a completed review could not be saved
pub const PERSIST_FAILED_REPLY: &str =
    "Sorry, we couldn't save your review. Please send it again.";

/// Errors surfaced by the runtime to the transport
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The review store rejected a completed review; the session was kept
    #[error("Failed to persist review: {0}")]
    Persistence(String),
}

impl RuntimeError {
    /// Text to send to the contact in place of the normal reply
    pub fn reply(&self) -> &'static str {
        match self {
            RuntimeError::Persistence(_) => PERSIST_FAILED_REPLY,
        }
    }
}
