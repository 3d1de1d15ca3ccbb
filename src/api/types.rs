//! API request and response types

use serde::{Deserialize, Serialize};

const DEFAULT_LIST_LIMIT: u32 = 100;

/// Inbound message webhook form, as posted by the messaging provider.
///
/// The provider sends many more fields; only these two are used.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "Body")]
    pub body: String,
}

/// Pagination for the review listing
#[derive(Debug, Deserialize)]
pub struct ListReviewsQuery {
    #[serde(default)]
    pub skip: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_LIST_LIMIT
}

/// Response for the service root
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
