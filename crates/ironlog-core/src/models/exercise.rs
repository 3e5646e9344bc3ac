//! Exercise catalog model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ExecutionType;

/// An exercise from the catalog, either owned by a user or global.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    /// Unique identifier for the exercise
    pub id: u64,

    /// Display name
    pub name: String,

    /// Free-text muscle-group tag, compared by exact match
    pub muscle_group: String,

    /// How one execution of this exercise is measured
    pub execution_type: ExecutionType,

    /// Owning user, `None` for the global catalog
    pub owner: Option<String>,

    /// Timestamp when the exercise was created (UTC)
    pub created_at: Timestamp,
}

impl Exercise {
    /// Whether this exercise belongs to the shared catalog.
    pub fn is_global(&self) -> bool {
        self.owner.is_none()
    }
}
