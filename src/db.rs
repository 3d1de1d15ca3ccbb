//! Database module for the review collector
//!
//! Provides persistence for completed reviews.

mod schema;

pub use schema::*;

use crate::state_machine::NewReview;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Database connection lock poisoned")]
    Poisoned,
    #[error("Invalid timestamp in row {id}: {value}")]
    InvalidTimestamp { id: i64, value: String },
}

pub type DbResult<T> = Result<T, DbError>;

/// Thread-safe database handle
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.run_migrations()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[allow(dead_code)] // Used in tests
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.run_migrations()?;
        Ok(db)
    }

    fn conn(&self) -> DbResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| DbError::Poisoned)
    }

    fn run_migrations(&self) -> DbResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ==================== Review Operations ====================

    /// Insert a completed review, stamping `created_at` with the current time.
    ///
    /// A single INSERT, so a failure leaves no partial record.
    pub fn create_review(&self, review: &NewReview) -> DbResult<Review> {
        let conn = self.conn()?;
        // Stored at microsecond precision; keep the returned value identical
        let now = Utc::now().trunc_subsecs(6);

        conn.execute(
            "INSERT INTO reviews (contact_number, user_name, product_name, product_review, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                review.contact_number,
                review.user_name,
                review.product_name,
                review.review_text,
                format_datetime(&now),
            ],
        )?;

        Ok(Review {
            id: conn.last_insert_rowid(),
            contact_number: review.contact_number.clone(),
            user_name: review.user_name.clone(),
            product_name: review.product_name.clone(),
            review_text: review.review_text.clone(),
            created_at: now,
        })
    }

    /// List reviews newest first, skipping `skip` and returning at most `limit`
    pub fn list_reviews(&self, skip: u32, limit: u32) -> DbResult<Vec<Review>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, contact_number, user_name, product_name, product_review, created_at
             FROM reviews
             ORDER BY created_at DESC, id DESC
             LIMIT ?1 OFFSET ?2",
        )?;

        let rows = stmt.query_map(params![limit, skip], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut reviews = Vec::new();
        for row in rows {
            let (id, contact_number, user_name, product_name, review_text, created_at) = row?;
            reviews.push(Review {
                id,
                contact_number,
                user_name,
                product_name,
                review_text,
                created_at: parse_datetime(id, &created_at)?,
            });
        }
        Ok(reviews)
    }

    /// Total number of stored reviews
    pub fn count_reviews(&self) -> DbResult<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM reviews", [], |row| row.get(0))?;
        Ok(count)
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_datetime(id: i64, s: &str) -> DbResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| DbError::InvalidTimestamp {
            id,
            value: s.to_string(),
        })
}
