//! Database schema and types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// SQL schema for initialization
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS reviews (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_number TEXT NOT NULL,
    user_name TEXT NOT NULL,
    product_name TEXT NOT NULL,
    product_review TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reviews_contact ON reviews(contact_number);
CREATE INDEX IF NOT EXISTS idx_reviews_created ON reviews(created_at DESC, id DESC);
";

/// A persisted review
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub contact_number: String,
    pub user_name: String,
    pub product_name: String,
    #[serde(rename = "product_review")]
    pub review_text: String,
    pub created_at: DateTime<Utc>,
}
