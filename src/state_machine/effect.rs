//! Effects produced by state transitions

use crate::state_machine::state::NewReview;

/// Effects to be executed by the runtime after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the updated session back to the session store
    SaveSession,

    /// Persist a completed review
    PersistReview { review: NewReview },

    /// Remove the session from the store.
    ///
    /// Always follows a `PersistReview`; the runtime skips it when the
    /// persist fails so the contact can resend the review.
    ClearSession,
}

impl Effect {
    pub fn persist_review(review: NewReview) -> Self {
        Effect::PersistReview { review }
    }
}
