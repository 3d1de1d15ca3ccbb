//! Immutable per-message context for transitions

/// Facts about the inbound message that are not part of the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvContext {
    /// Contact identifier the message came from
    pub contact_number: String,
}

impl ConvContext {
    pub fn new(contact_number: impl Into<String>) -> Self {
        Self {
            contact_number: contact_number.into(),
        }
    }
}
