//! Service configuration from the environment

use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;

/// Startup settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite file for completed reviews
    pub db_path: PathBuf,
    /// HTTP listen port
    pub port: u16,
}

impl Config {
    /// Read `REVIEWS_DB_PATH` and `REVIEWS_PORT`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("REVIEWS_DB_PATH").ok(),
            std::env::var("REVIEWS_PORT").ok(),
            std::env::var("HOME").ok(),
        )
    }

    fn from_vars(db_path: Option<String>, port: Option<String>, home: Option<String>) -> Self {
        let db_path = db_path.map_or_else(
            || {
                let home = home.unwrap_or_else(|| "/tmp".to_string());
                PathBuf::from(format!("{home}/.review-collector/reviews.db"))
            },
            PathBuf::from,
        );

        let port = port.and_then(|p| p.parse().ok()).unwrap_or(DEFAULT_PORT);

        Self { db_path, port }
    }
}
