//! Pure state transition function
//!
//! Given the same session, context and message text, `advance` always
//! produces the same result, with no I/O side effects.

use super::state::NewReview;
use super::{ConvContext, ConvState, Effect, Session};

pub const GREETING_REPLY: &str = "Hi! Which product is this review for?";
pub const ASK_NAME_REPLY: &str = "What's your name?";

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// Session to keep for the contact, `None` once the dialogue completed
    pub new_session: Option<Session>,
    /// Text to send back to the contact
    pub reply: String,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    fn continuing(session: Session, reply: impl Into<String>) -> Self {
        Self {
            new_session: Some(session),
            reply: reply.into(),
            effects: vec![Effect::SaveSession],
        }
    }

    fn completed(review: NewReview, reply: String) -> Self {
        Self {
            new_session: None,
            reply,
            effects: vec![Effect::persist_review(review), Effect::ClearSession],
        }
    }

    /// The review emitted by this transition, if it completed the dialogue
    #[allow(dead_code)] // Used in tests
    pub fn completed_review(&self) -> Option<&NewReview> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::PersistReview { review } => Some(review),
            _ => None,
        })
    }

    #[allow(dead_code)] // Used in tests
    pub fn is_complete(&self) -> bool {
        self.new_session.is_none()
    }
}

/// Advance a session by one inbound message.
///
/// The text is trimmed before use. Empty text is accepted and stored
/// as-is; there is no rejection path.
pub fn advance(session: &Session, context: &ConvContext, text: &str) -> TransitionResult {
    let message = text.trim();

    match session.state {
        // Any first message is treated as a greeting
        ConvState::Init => TransitionResult::continuing(
            Session {
                state: ConvState::AwaitingProduct,
                ..session.clone()
            },
            GREETING_REPLY,
        ),

        ConvState::AwaitingProduct => TransitionResult::continuing(
            Session {
                state: ConvState::AwaitingName,
                product_name: Some(message.to_string()),
                ..session.clone()
            },
            ASK_NAME_REPLY,
        ),

        ConvState::AwaitingName => {
            let product_name = session.product_name.clone().unwrap_or_default();
            let reply = format!("Please send your review for {product_name}.");
            TransitionResult::continuing(
                Session {
                    state: ConvState::AwaitingReview,
                    user_name: Some(message.to_string()),
                    ..session.clone()
                },
                reply,
            )
        }

        ConvState::AwaitingReview => {
            let user_name = session.user_name.clone().unwrap_or_default();
            let product_name = session.product_name.clone().unwrap_or_default();
            let reply =
                format!("Thanks {user_name} — your review for {product_name} has been recorded.");
            let review = NewReview {
                contact_number: context.contact_number.clone(),
                user_name,
                product_name,
                review_text: message.to_string(),
            };
            TransitionResult::completed(review, reply)
        }
    }
}
