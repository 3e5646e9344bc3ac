//! High-level tracker API.
//!
//! [`Tracker`] is the single entry point the CLI and the MCP server use. It
//! is bound to one database file and one user; every operation validates its
//! parameters, opens the database on a blocking thread and scopes all reads
//! and writes to that user.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (display       │───▶│ (exercise_ops,  │───▶│   (via db/)     │
//! │   wrappers)     │    │  plan_ops, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!                               │
//!                               ▼
//!                        progress (pure)
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use ironlog_core::{params::WeekOf, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/tmp/ironlog.db"))
//!     .with_user("ana")
//!     .build()
//!     .await?;
//!
//! let progress = tracker.weekly_progress(&WeekOf::default()).await?;
//! println!("{progress}");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{db::Database, error::Result};

pub mod builder;
pub mod exercise_ops;
pub mod handlers;
pub mod log_ops;
pub mod plan_ops;
pub mod progress_ops;
pub mod seed;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;
pub use seed::SeedSummary;

/// Main tracker interface, bound to one database and one user.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) user: String,
    pub(crate) weekly_cardio_minutes: u32,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, user: String, weekly_cardio_minutes: u32) -> Self {
        Self {
            db_path,
            user,
            weekly_cardio_minutes,
        }
    }

    /// The user every operation is scoped to.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Weekly cardio target used when the plan carries none.
    pub fn weekly_cardio_minutes(&self) -> u32 {
        self.weekly_cardio_minutes
    }

    /// Runs `operation` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &str) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user = self.user.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db, &user)
        })
        .await?
    }
}
