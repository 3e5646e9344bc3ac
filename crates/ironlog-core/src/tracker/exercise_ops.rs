//! Exercise catalog operations for the Tracker.

use super::Tracker;
use crate::{error::Result, models::Exercise, params::CreateExercise};

impl Tracker {
    /// Adds an exercise to the user's catalog.
    pub async fn create_exercise(&self, params: &CreateExercise) -> Result<Exercise> {
        params.validate()?;
        let name = params.name.trim().to_string();
        let muscle_group = params.muscle_group.trim().to_string();
        let execution_type = params.execution_type;

        self.with_database(move |db, user| {
            db.create_exercise(Some(user), &name, &muscle_group, execution_type)
        })
        .await
    }

    /// The user's exercises plus the global catalog, ordered by name.
    pub async fn list_exercises(&self) -> Result<Vec<Exercise>> {
        self.with_database(|db, user| db.list_exercises(user)).await
    }
}
