//! Messaging provider reply envelope

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use quick_xml::escape::partial_escape;

/// A `<Response><Message>` document carrying one reply
#[derive(Debug)]
pub struct MessageReply {
    status: StatusCode,
    text: String,
}

impl MessageReply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            text: text.into(),
        }
    }

    /// Reply delivered alongside a 500, so the caller sees the failure
    pub fn internal_error(text: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            text: text.into(),
        }
    }

    pub fn to_xml(&self) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?><Response><Message>{}</Message></Response>"#,
            partial_escape(strip_invalid_xml_chars(&self.text).as_str())
        )
    }
}

/// Drop control characters XML 1.0 cannot carry, even as references
fn strip_invalid_xml_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

impl IntoResponse for MessageReply {
    fn into_response(self) -> Response {
        let body = self.to_xml();
        (
            self.status,
            [(header::CONTENT_TYPE, "application/xml")],
            body,
        )
            .into_response()
    }
}
