//! Review dialogue state machine
//!
//! Pure state transitions in the Elm Architecture style: the runtime feeds
//! in a session and a message, and executes the effects that come back.

mod context;
mod effect;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use context::ConvContext;
pub use effect::Effect;
pub use state::{ConvState, NewReview, Session};
pub use transition::advance;
