//! User registration.

use jiff::Timestamp;
use rusqlite::params;

use super::utils::to_millis;
use crate::error::{DatabaseResultExt, Result};

const INSERT_USER_SQL: &str = "INSERT OR IGNORE INTO users (id, created_at) VALUES (?1, ?2)";

impl super::Database {
    /// Registers `user` unless it already exists. Returns whether a new row
    /// was created.
    pub fn ensure_user(&self, user: &str) -> Result<bool> {
        let inserted = self
            .connection
            .execute(INSERT_USER_SQL, params![user, to_millis(Timestamp::now())])
            .db_context("Failed to register user")?;

        if inserted > 0 {
            log::info!("Registered user '{user}'");
        }
        Ok(inserted > 0)
    }
}
