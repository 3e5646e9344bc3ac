//! Database operations and SQLite management.
//!
//! This module owns the SQLite connection, the embedded schema and one query
//! module per domain area. Every query is scoped to a user id; callers pass
//! the user explicitly and this layer never assumes one.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod exercise_queries;
pub mod log_queries;
pub mod migrations;
pub mod plan_queries;
pub mod user_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Runs `operation` inside one savepoint: every write it makes is kept
    /// when it returns `Ok` and rolled back when it returns `Err`.
    pub fn atomically<T, F>(&mut self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.connection
            .execute_batch("SAVEPOINT atomically")
            .db_context("Failed to begin savepoint")?;

        match operation(self) {
            Ok(value) => {
                self.connection
                    .execute_batch("RELEASE atomically")
                    .db_context("Failed to release savepoint")?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = self
                    .connection
                    .execute_batch("ROLLBACK TO atomically; RELEASE atomically")
                {
                    log::error!("Failed to roll back savepoint: {rollback}");
                }
                Err(e)
            }
        }
    }
}
