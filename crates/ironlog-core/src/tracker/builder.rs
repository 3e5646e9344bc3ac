//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    progress::DEFAULT_WEEKLY_CARDIO_MINUTES,
};

/// User id used when none is configured.
pub const DEFAULT_USER: &str = "local";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    user: String,
    weekly_cardio_minutes: u32,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            user: DEFAULT_USER.to_string(),
            weekly_cardio_minutes: DEFAULT_WEEKLY_CARDIO_MINUTES,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/ironlog/ironlog.db` or
    /// `~/.local/share/ironlog/ironlog.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the user every operation is scoped to.
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Sets the weekly cardio target used when the plan has no cardio
    /// entries.
    pub fn with_weekly_cardio_minutes(mut self, minutes: u32) -> Self {
        self.weekly_cardio_minutes = minutes;
        self
    }

    /// Builds the configured tracker, creating the database and registering
    /// the user if needed.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the user id is blank
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let user = self.user.trim().to_string();
        if user.is_empty() {
            return Err(TrackerError::invalid_input("user").with_reason("must not be empty"));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let db_path_clone = db_path.clone();
        let user_clone = user.clone();
        task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            db.ensure_user(&user_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await??;

        log::debug!("Tracker ready at {} for user '{user}'", db_path.display());
        Ok(Tracker::new(db_path, user, self.weekly_cardio_minutes))
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("ironlog")
            .place_data_file("ironlog.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
