//! Conversation runtime executor

use super::traits::{ReviewStore, SessionStore};
use super::RuntimeError;
use crate::state_machine::{advance, ConvContext, Effect, Session};

/// Drives the review dialogue for inbound messages.
///
/// Generic over session and review storage so tests can run it against
/// in-memory mocks. Holds no conversation state itself.
pub struct ConversationRuntime<S, R>
where
    S: SessionStore,
    R: ReviewStore,
{
    sessions: S,
    reviews: R,
}

impl<S, R> ConversationRuntime<S, R>
where
    S: SessionStore,
    R: ReviewStore,
{
    pub fn new(sessions: S, reviews: R) -> Self {
        Self { sessions, reviews }
    }

    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    pub fn reviews(&self) -> &R {
        &self.reviews
    }

    /// Process one inbound message and return the reply text.
    ///
    /// The contact stays locked from session lookup until the session has
    /// been written back or cleared, so messages from one contact are
    /// applied one at a time.
    pub async fn handle_message(&self, contact: &str, body: &str) -> Result<String, RuntimeError> {
        let _guard = self.sessions.lock_contact(contact).await;

        let session = self.sessions.get_or_create(contact).await;
        let context = ConvContext::new(contact);
        let result = advance(&session, &context, body);

        tracing::info!(
            contact = %contact,
            from = session.state.as_str(),
            to = result.new_session.as_ref().map_or("completed", |s| s.state.as_str()),
            "Conversation advanced"
        );

        self.execute_effects(contact, result.new_session.as_ref(), result.effects)
            .await?;

        Ok(result.reply)
    }

    async fn execute_effects(
        &self,
        contact: &str,
        new_session: Option<&Session>,
        effects: Vec<Effect>,
    ) -> Result<(), RuntimeError> {
        for effect in effects {
            match effect {
                Effect::SaveSession => {
                    if let Some(session) = new_session {
                        self.sessions.save(contact, session).await;
                    }
                }
                Effect::PersistReview { review } => {
                    // Bail before ClearSession so the contact can resend
                    let saved = self.reviews.create_review(&review).await.map_err(|e| {
                        tracing::error!(contact = %contact, error = %e, "Failed to persist review");
                        RuntimeError::Persistence(e)
                    })?;
                    tracing::info!(
                        contact = %contact,
                        review_id = saved.id,
                        product = %saved.product_name,
                        "Review recorded"
                    );
                }
                Effect::ClearSession => {
                    self.sessions.clear(contact).await;
                }
            }
        }
        Ok(())
    }
}
