//! Conversation state types

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversation State
// ============================================================================

/// Position of a contact in the review dialogue.
///
/// The chain is strictly linear: `Init -> AwaitingProduct -> AwaitingName
/// -> AwaitingReview`. Completion is not a stored state; a finished
/// session is removed from the store instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConvState {
    /// Fresh session, nothing asked yet
    #[default]
    Init,

    /// Greeting sent, waiting for the product name
    AwaitingProduct,

    /// Product captured, waiting for the reviewer's name
    AwaitingName,

    /// Name captured, waiting for the review text
    AwaitingReview,
}

impl ConvState {
    /// Stable name for logging
    pub fn as_str(self) -> &'static str {
        match self {
            ConvState::Init => "init",
            ConvState::AwaitingProduct => "awaiting_product",
            ConvState::AwaitingName => "awaiting_name",
            ConvState::AwaitingReview => "awaiting_review",
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// Per-contact dialogue progress.
///
/// Fields fill in dialogue order: `product_name` is set once the session
/// has left `AwaitingProduct`, `user_name` once it has left `AwaitingName`.
/// `review_text` is only ever set on the completing transition, so a
/// stored session never carries it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Session {
    pub state: ConvState,
    pub product_name: Option<String>,
    pub user_name: Option<String>,
    pub review_text: Option<String>,
}

impl Session {
    /// A session at `Init` with no captured fields
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the captured fields match what the current state implies
    #[allow(dead_code)] // Used in tests
    pub fn is_consistent(&self) -> bool {
        let (product, name) = match self.state {
            ConvState::Init | ConvState::AwaitingProduct => (false, false),
            ConvState::AwaitingName => (true, false),
            ConvState::AwaitingReview => (true, true),
        };
        self.product_name.is_some() == product
            && self.user_name.is_some() == name
            && self.review_text.is_none()
    }
}

// ============================================================================
// Completed Review Payload
// ============================================================================

/// Review fields collected by a finished dialogue, ready to persist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewReview {
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    pub review_text: String,
}
