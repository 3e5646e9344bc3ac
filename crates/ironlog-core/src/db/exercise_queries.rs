//! Exercise catalog operations.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, stored_instant, tag_column, timestamp_column, to_millis};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{ExecutionType, Exercise},
};

const INSERT_EXERCISE_SQL: &str = "INSERT INTO exercises (user_id, name, muscle_group, execution_type, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_VISIBLE_EXERCISE_SQL: &str = "SELECT id, name, muscle_group, execution_type, user_id, created_at FROM exercises WHERE id = ?1 AND (user_id = ?2 OR user_id IS NULL)";
const SELECT_OWN_EXERCISE_BY_NAME_SQL: &str = "SELECT id, name, muscle_group, execution_type, user_id, created_at FROM exercises WHERE user_id = ?1 AND name = ?2 ORDER BY id LIMIT 1";
const SELECT_VISIBLE_EXERCISES_SQL: &str = "SELECT id, name, muscle_group, execution_type, user_id, created_at FROM exercises WHERE user_id = ?1 OR user_id IS NULL ORDER BY name, id";
const COUNT_OWN_EXERCISES_SQL: &str = "SELECT COUNT(*) FROM exercises WHERE user_id = ?1";

impl super::Database {
    /// Builds an Exercise from columns `offset..offset + 6` of a row in the
    /// order id, name, muscle_group, execution_type, user_id, created_at.
    pub(crate) fn build_exercise_from_row(
        row: &rusqlite::Row<'_>,
        offset: usize,
    ) -> rusqlite::Result<Exercise> {
        Ok(Exercise {
            id: id_column(row, offset)?,
            name: row.get(offset + 1)?,
            muscle_group: row.get(offset + 2)?,
            execution_type: tag_column::<ExecutionType>(row, offset + 3)?,
            owner: row.get(offset + 4)?,
            created_at: timestamp_column(row, offset + 5)?,
        })
    }

    /// Adds an exercise to `owner`'s catalog, or to the global catalog when
    /// `owner` is `None`.
    pub fn create_exercise(
        &self,
        owner: Option<&str>,
        name: &str,
        muscle_group: &str,
        execution_type: ExecutionType,
    ) -> Result<Exercise> {
        let now = stored_instant(Timestamp::now())?;
        self.connection
            .execute(
                INSERT_EXERCISE_SQL,
                params![
                    owner,
                    name,
                    muscle_group,
                    execution_type.as_str(),
                    to_millis(now)
                ],
            )
            .db_context("Failed to insert exercise")?;

        let id = self.connection.last_insert_rowid() as u64;
        log::debug!("Created exercise {id} '{name}' (owner: {owner:?})");

        Ok(Exercise {
            id,
            name: name.to_string(),
            muscle_group: muscle_group.to_string(),
            execution_type,
            owner: owner.map(str::to_string),
            created_at: now,
        })
    }

    /// Looks up an exercise visible to `user`: one they own or a global one.
    pub fn get_exercise(&self, user: &str, id: u64) -> Result<Option<Exercise>> {
        self.connection
            .query_row(SELECT_VISIBLE_EXERCISE_SQL, params![id as i64, user], |row| {
                Self::build_exercise_from_row(row, 0)
            })
            .optional()
            .db_context("Failed to query exercise")
    }

    /// Finds one of `user`'s own exercises by exact name.
    pub fn find_exercise_by_name(&self, user: &str, name: &str) -> Result<Option<Exercise>> {
        self.connection
            .query_row(SELECT_OWN_EXERCISE_BY_NAME_SQL, params![user, name], |row| {
                Self::build_exercise_from_row(row, 0)
            })
            .optional()
            .db_context("Failed to query exercise by name")
    }

    /// Lists `user`'s exercises together with the global catalog, ordered by
    /// name.
    pub fn list_exercises(&self, user: &str) -> Result<Vec<Exercise>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_VISIBLE_EXERCISES_SQL)
            .db_context("Failed to prepare query")?;

        let exercises = stmt
            .query_map(params![user], |row| Self::build_exercise_from_row(row, 0))
            .db_context("Failed to query exercises")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read exercise row")?;

        Ok(exercises)
    }

    /// Number of exercises `user` owns, global ones excluded.
    pub fn count_own_exercises(&self, user: &str) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_OWN_EXERCISES_SQL, params![user], |row| row.get(0))
            .db_context("Failed to count exercises")?;
        Ok(count as u64)
    }
}
