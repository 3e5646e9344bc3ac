//! Execution records, cardio sessions and daily logs.
//!
//! Instants are passed in by the caller so the tracker stamps "now" while
//! tests can place records anywhere in a week.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, OptionalExtension};

use super::utils::{
    date_column, id_column, stored_instant, tag_column, timestamp_column, to_millis,
};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{CardioSession, DailyLog, ExecutionRecord, ExecutionType, FoodIntake},
    params::{LogCardio, LogExecution},
};

const CHECK_EXERCISE_VISIBLE_SQL: &str = "SELECT EXISTS(SELECT 1 FROM exercises WHERE id = ?1 AND (user_id = ?2 OR user_id IS NULL))";
const CHECK_PLAN_ENTRY_OWNED_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plan_entries pe JOIN day_plans dp ON dp.id = pe.day_plan_id WHERE pe.id = ?1 AND dp.user_id = ?2)";
const INSERT_EXECUTION_SQL: &str = "INSERT INTO executions (user_id, exercise_id, plan_entry_id, execution_type, reps, weight, duration_sec, notes, executed_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_EXECUTIONS_BETWEEN_SQL: &str = "SELECT id, exercise_id, plan_entry_id, execution_type, reps, weight, duration_sec, notes, executed_at FROM executions WHERE user_id = ?1 AND executed_at >= ?2 AND executed_at <= ?3 ORDER BY executed_at, id";
const SELECT_EXECUTION_HISTORY_SQL: &str = "SELECT id, exercise_id, plan_entry_id, execution_type, reps, weight, duration_sec, notes, executed_at FROM executions WHERE user_id = ?1 AND exercise_id = ?2 ORDER BY executed_at DESC, id DESC LIMIT ?3";

const INSERT_CARDIO_SQL: &str = "INSERT INTO cardio_sessions (user_id, modality, duration_minutes, distance_km, notes, started_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_CARDIO_BETWEEN_SQL: &str = "SELECT id, modality, duration_minutes, distance_km, notes, started_at FROM cardio_sessions WHERE user_id = ?1 AND started_at >= ?2 AND started_at <= ?3 ORDER BY started_at, id";

// A NULL note on conflict keeps the stored one.
const UPSERT_DAILY_LOG_SQL: &str = "INSERT INTO daily_logs (user_id, log_date, water_liters, food_intake, note, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6) \
     ON CONFLICT (user_id, log_date) DO UPDATE SET water_liters = excluded.water_liters, food_intake = excluded.food_intake, note = COALESCE(excluded.note, daily_logs.note), updated_at = excluded.updated_at";
const SELECT_DAILY_LOG_SQL: &str = "SELECT id, log_date, water_liters, food_intake, note, created_at, updated_at FROM daily_logs WHERE user_id = ?1 AND log_date = ?2";

impl super::Database {
    fn build_execution_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ExecutionRecord> {
        Ok(ExecutionRecord {
            id: id_column(row, 0)?,
            exercise_id: id_column(row, 1)?,
            plan_entry_id: row.get::<_, Option<i64>>(2)?.map(|id| id as u64),
            execution_type: tag_column::<ExecutionType>(row, 3)?,
            reps: row.get(4)?,
            weight: row.get(5)?,
            duration_sec: row.get(6)?,
            notes: row.get(7)?,
            executed_at: timestamp_column(row, 8)?,
        })
    }

    fn build_cardio_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CardioSession> {
        Ok(CardioSession {
            id: id_column(row, 0)?,
            modality: row.get(1)?,
            duration_minutes: row.get(2)?,
            distance_km: row.get(3)?,
            notes: row.get(4)?,
            started_at: timestamp_column(row, 5)?,
        })
    }

    fn build_daily_log_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DailyLog> {
        Ok(DailyLog {
            id: id_column(row, 0)?,
            date: date_column(row, 1)?,
            water_liters: row.get(2)?,
            food_intake: tag_column::<FoodIntake>(row, 3)?,
            note: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
            updated_at: timestamp_column(row, 6)?,
        })
    }

    /// Appends an execution record for `user` at `executed_at`.
    ///
    /// The exercise must be visible to `user` and the plan entry, when
    /// given, must belong to them.
    pub fn insert_execution(
        &self,
        user: &str,
        execution: &LogExecution,
        executed_at: Timestamp,
    ) -> Result<ExecutionRecord> {
        let executed_at = stored_instant(executed_at)?;
        let visible: bool = self
            .connection
            .query_row(
                CHECK_EXERCISE_VISIBLE_SQL,
                params![execution.exercise_id as i64, user],
                |row| row.get(0),
            )
            .db_context("Failed to check exercise existence")?;
        if !visible {
            return Err(TrackerError::ExerciseNotFound {
                id: execution.exercise_id,
            });
        }

        if let Some(entry_id) = execution.plan_entry_id {
            let owned: bool = self
                .connection
                .query_row(
                    CHECK_PLAN_ENTRY_OWNED_SQL,
                    params![entry_id as i64, user],
                    |row| row.get(0),
                )
                .db_context("Failed to check plan entry existence")?;
            if !owned {
                return Err(TrackerError::PlanEntryNotFound { id: entry_id });
            }
        }

        self.connection
            .execute(
                INSERT_EXECUTION_SQL,
                params![
                    user,
                    execution.exercise_id as i64,
                    execution.plan_entry_id.map(|id| id as i64),
                    execution.execution_type.as_str(),
                    execution.reps,
                    execution.weight,
                    execution.duration_sec,
                    execution.notes.as_deref(),
                    to_millis(executed_at)
                ],
            )
            .db_context("Failed to insert execution")?;

        let id = self.connection.last_insert_rowid() as u64;
        log::debug!(
            "Logged execution {id} of exercise {} for user '{user}'",
            execution.exercise_id
        );

        Ok(ExecutionRecord {
            id,
            exercise_id: execution.exercise_id,
            plan_entry_id: execution.plan_entry_id,
            execution_type: execution.execution_type,
            reps: execution.reps,
            weight: execution.weight,
            duration_sec: execution.duration_sec,
            notes: execution.notes.clone(),
            executed_at,
        })
    }

    /// `user`'s executions with `start <= executed_at <= end`, oldest first.
    pub fn executions_between(
        &self,
        user: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<ExecutionRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EXECUTIONS_BETWEEN_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(
                params![user, to_millis(start), to_millis(end)],
                Self::build_execution_from_row,
            )
            .db_context("Failed to query executions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read execution row")?;

        Ok(records)
    }

    /// The latest `limit` executions of one exercise, most recent first.
    pub fn execution_history(
        &self,
        user: &str,
        exercise_id: u64,
        limit: u32,
    ) -> Result<Vec<ExecutionRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_EXECUTION_HISTORY_SQL)
            .db_context("Failed to prepare query")?;

        let records = stmt
            .query_map(
                params![user, exercise_id as i64, limit],
                Self::build_execution_from_row,
            )
            .db_context("Failed to query execution history")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read execution row")?;

        log::debug!(
            "Loaded {} of at most {limit} executions for exercise {exercise_id}",
            records.len()
        );
        Ok(records)
    }

    /// Records a cardio session for `user` starting at `started_at`.
    pub fn insert_cardio(
        &self,
        user: &str,
        session: &LogCardio,
        started_at: Timestamp,
    ) -> Result<CardioSession> {
        let started_at = stored_instant(started_at)?;
        let modality = session.modality.trim();
        self.connection
            .execute(
                INSERT_CARDIO_SQL,
                params![
                    user,
                    modality,
                    session.duration_minutes,
                    session.distance_km,
                    session.notes.as_deref(),
                    to_millis(started_at)
                ],
            )
            .db_context("Failed to insert cardio session")?;

        let id = self.connection.last_insert_rowid() as u64;
        log::debug!("Logged cardio session {id} for user '{user}'");

        Ok(CardioSession {
            id,
            modality: modality.to_string(),
            duration_minutes: session.duration_minutes,
            distance_km: session.distance_km,
            notes: session.notes.clone(),
            started_at,
        })
    }

    /// `user`'s cardio sessions with `start <= started_at <= end`, oldest
    /// first.
    pub fn cardio_between(
        &self,
        user: &str,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<CardioSession>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CARDIO_BETWEEN_SQL)
            .db_context("Failed to prepare query")?;

        let sessions = stmt
            .query_map(
                params![user, to_millis(start), to_millis(end)],
                Self::build_cardio_from_row,
            )
            .db_context("Failed to query cardio sessions")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read cardio session row")?;

        Ok(sessions)
    }

    /// Creates or replaces `user`'s log for `date`. A `None` note leaves any
    /// stored note untouched.
    pub fn upsert_daily_log(
        &self,
        user: &str,
        date: Date,
        water_liters: f64,
        food_intake: FoodIntake,
        note: Option<&str>,
    ) -> Result<DailyLog> {
        let now = to_millis(Timestamp::now());
        let date_str = date.to_string();
        self.connection
            .execute(
                UPSERT_DAILY_LOG_SQL,
                params![user, &date_str, water_liters, food_intake.as_str(), note, now],
            )
            .db_context("Failed to save daily log")?;

        log::debug!("Saved daily log {date_str} for user '{user}'");
        self.get_daily_log(user, date)?.ok_or_else(|| {
            TrackerError::database("Failed to reload saved daily log")
                .with_source(rusqlite::Error::QueryReturnedNoRows)
        })
    }

    /// `user`'s log for `date`, if one was saved.
    pub fn get_daily_log(&self, user: &str, date: Date) -> Result<Option<DailyLog>> {
        self.connection
            .query_row(
                SELECT_DAILY_LOG_SQL,
                params![user, date.to_string()],
                Self::build_daily_log_from_row,
            )
            .optional()
            .db_context("Failed to query daily log")
    }
}
