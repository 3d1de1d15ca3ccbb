//! HTTP API for the review collector

mod handlers;
mod twiml;
mod types;

pub use handlers::create_router;

use crate::runtime::{ReviewStore, SessionStore, SharedRuntime};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: Arc<SharedRuntime>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionStore>, reviews: Arc<dyn ReviewStore>) -> Self {
        Self {
            runtime: Arc::new(SharedRuntime::new(sessions, reviews)),
        }
    }
}
