//! Weekly plan operations: day plans and their ordered entries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{id_column, missing_column, tag_column, timestamp_column, to_millis};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{DayPlan, ExecutionMode, PlanEntry, PlanTargets, WeekDay, WorkoutKind},
};

/// Name given to a day plan created implicitly by its first entry.
pub const DEFAULT_DAY_PLAN_NAME: &str = "Weekly plan";

const SELECT_DAY_PLAN_ID_SQL: &str = "SELECT id FROM day_plans WHERE user_id = ?1 AND week_day = ?2";
const INSERT_DAY_PLAN_SQL: &str = "INSERT INTO day_plans (user_id, week_day, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)";
const RENAME_DAY_PLAN_SQL: &str = "UPDATE day_plans SET name = ?1, updated_at = ?2 WHERE id = ?3";
const TOUCH_DAY_PLAN_SQL: &str = "UPDATE day_plans SET updated_at = ?1 WHERE id = ?2";
const COUNT_DAY_PLAN_ENTRIES_SQL: &str = "SELECT COUNT(*) FROM plan_entries WHERE day_plan_id = ?1";
const INSERT_PLAN_ENTRY_SQL: &str = "INSERT INTO plan_entries (day_plan_id, exercise_id, kind, mode, sets, reps, weight, duration_sec, rest_seconds, weekly_minutes, position, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const SELECT_DAY_PLANS_SQL: &str = "SELECT id, week_day, name, created_at, updated_at FROM day_plans WHERE user_id = ?1 ORDER BY week_day";
const SELECT_DAY_PLAN_SQL: &str = "SELECT id, week_day, name, created_at, updated_at FROM day_plans WHERE user_id = ?1 AND week_day = ?2";

// Entry rows always join their day plan (for user scoping and week_day) and
// their exercise.
const PLAN_ENTRY_SELECT: &str = "SELECT pe.id, pe.day_plan_id, dp.week_day, pe.kind, pe.mode, pe.sets, pe.reps, pe.weight, pe.duration_sec, pe.rest_seconds, pe.weekly_minutes, pe.position, pe.created_at, e.id, e.name, e.muscle_group, e.execution_type, e.user_id, e.created_at FROM plan_entries pe JOIN day_plans dp ON dp.id = pe.day_plan_id JOIN exercises e ON e.id = pe.exercise_id";
const EXERCISE_COLUMNS_OFFSET: usize = 13;

/// Nullable target columns in insert order: sets, reps, weight,
/// duration_sec, rest_seconds, weekly_minutes.
type TargetColumns = (
    Option<u32>,
    Option<u32>,
    Option<f64>,
    Option<u32>,
    Option<u32>,
    Option<u32>,
);

fn target_columns(targets: &PlanTargets) -> TargetColumns {
    match *targets {
        PlanTargets::Reps {
            sets,
            reps,
            weight,
            rest_seconds,
        } => (Some(sets), Some(reps), weight, None, Some(rest_seconds), None),
        PlanTargets::Timed {
            sets,
            duration_sec,
            rest_seconds,
        } => (Some(sets), None, None, Some(duration_sec), Some(rest_seconds), None),
        PlanTargets::Cardio { weekly_minutes } => {
            (None, None, None, None, None, Some(weekly_minutes))
        }
    }
}

fn required(row: &rusqlite::Row<'_>, idx: usize, what: &str) -> rusqlite::Result<u32> {
    row.get::<_, Option<u32>>(idx)?
        .ok_or_else(|| missing_column(idx, what))
}

fn week_day_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<WeekDay> {
    WeekDay::try_from(row.get::<_, u8>(idx)?).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Integer, e.into())
    })
}

impl super::Database {
    fn build_targets_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlanTargets> {
        Ok(match tag_column::<ExecutionMode>(row, 4)? {
            ExecutionMode::Reps => PlanTargets::Reps {
                sets: required(row, 5, "sets")?,
                reps: required(row, 6, "reps")?,
                weight: row.get(7)?,
                rest_seconds: required(row, 9, "rest_seconds")?,
            },
            ExecutionMode::Timed => PlanTargets::Timed {
                sets: required(row, 5, "sets")?,
                duration_sec: required(row, 8, "duration_sec")?,
                rest_seconds: required(row, 9, "rest_seconds")?,
            },
            ExecutionMode::Cardio => PlanTargets::Cardio {
                weekly_minutes: required(row, 10, "weekly_minutes")?,
            },
        })
    }

    fn build_plan_entry_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PlanEntry> {
        Ok(PlanEntry {
            id: id_column(row, 0)?,
            day_plan_id: id_column(row, 1)?,
            week_day: week_day_column(row, 2)?,
            kind: tag_column::<WorkoutKind>(row, 3)?,
            targets: Self::build_targets_from_row(row)?,
            position: row.get(11)?,
            created_at: timestamp_column(row, 12)?,
            exercise: Self::build_exercise_from_row(row, EXERCISE_COLUMNS_OFFSET)?,
        })
    }

    fn build_day_plan_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<DayPlan> {
        Ok(DayPlan {
            id: id_column(row, 0)?,
            week_day: week_day_column(row, 1)?,
            name: row.get(2)?,
            created_at: timestamp_column(row, 3)?,
            updated_at: timestamp_column(row, 4)?,
            entries: Vec::new(),
        })
    }

    /// Appends an entry to `user`'s plan for `week_day`.
    ///
    /// The day plan is created on first use, named `plan_name` or
    /// [`DEFAULT_DAY_PLAN_NAME`]; an existing day plan is renamed when
    /// `plan_name` is given. The entry goes last, at position = number of
    /// entries already in the day plan. The exercise must already be
    /// resolved and visible to `user`.
    pub fn add_plan_entry(
        &mut self,
        user: &str,
        week_day: WeekDay,
        plan_name: Option<&str>,
        exercise_id: u64,
        kind: WorkoutKind,
        targets: &PlanTargets,
    ) -> Result<PlanEntry> {
        // savepoint, so this also nests inside `Database::atomically`
        let tx = self
            .connection
            .savepoint()
            .db_context("Failed to begin savepoint")?;

        let now = to_millis(Timestamp::now());
        let day = week_day.number();

        let existing: Option<i64> = tx
            .query_row(SELECT_DAY_PLAN_ID_SQL, params![user, day], |row| row.get(0))
            .optional()
            .db_context("Failed to look up day plan")?;

        let day_plan_id = match (existing, plan_name) {
            (Some(id), Some(name)) => {
                tx.execute(RENAME_DAY_PLAN_SQL, params![name, now, id])
                    .db_context("Failed to rename day plan")?;
                id
            }
            (Some(id), None) => {
                tx.execute(TOUCH_DAY_PLAN_SQL, params![now, id])
                    .db_context("Failed to update day plan timestamp")?;
                id
            }
            (None, name) => {
                let name = name.unwrap_or(DEFAULT_DAY_PLAN_NAME);
                tx.execute(INSERT_DAY_PLAN_SQL, params![user, day, name, now])
                    .db_context("Failed to insert day plan")?;
                log::debug!("Created day plan '{name}' for {week_day} (user '{user}')");
                tx.last_insert_rowid()
            }
        };

        let position: i64 = tx
            .query_row(COUNT_DAY_PLAN_ENTRIES_SQL, params![day_plan_id], |row| {
                row.get(0)
            })
            .db_context("Failed to count day plan entries")?;

        let (sets, reps, weight, duration_sec, rest_seconds, weekly_minutes) =
            target_columns(targets);
        tx.execute(
            INSERT_PLAN_ENTRY_SQL,
            params![
                day_plan_id,
                exercise_id as i64,
                kind.as_str(),
                targets.mode().as_str(),
                sets,
                reps,
                weight,
                duration_sec,
                rest_seconds,
                weekly_minutes,
                position,
                now
            ],
        )
        .db_context("Failed to insert plan entry")?;

        let id = tx.last_insert_rowid() as u64;
        tx.commit().db_context("Failed to release savepoint")?;

        log::debug!("Added plan entry {id} at position {position} on {week_day}");
        self.get_plan_entry(user, id)?
            .ok_or(TrackerError::PlanEntryNotFound { id })
    }

    /// Fetches one of `user`'s plan entries with its exercise.
    pub fn get_plan_entry(&self, user: &str, id: u64) -> Result<Option<PlanEntry>> {
        let sql = format!("{PLAN_ENTRY_SELECT} WHERE dp.user_id = ?1 AND pe.id = ?2");
        self.connection
            .query_row(&sql, params![user, id as i64], Self::build_plan_entry_from_row)
            .optional()
            .db_context("Failed to query plan entry")
    }

    /// Every plan entry of `user`, ordered by day then position.
    pub fn list_plan_entries(&self, user: &str) -> Result<Vec<PlanEntry>> {
        let sql = format!(
            "{PLAN_ENTRY_SELECT} WHERE dp.user_id = ?1 ORDER BY dp.week_day, pe.position, pe.id"
        );
        self.query_plan_entries(&sql, params![user])
    }

    /// Entries of one day plan, ordered by position.
    fn day_plan_entries(&self, user: &str, day_plan_id: u64) -> Result<Vec<PlanEntry>> {
        let sql = format!(
            "{PLAN_ENTRY_SELECT} WHERE dp.user_id = ?1 AND pe.day_plan_id = ?2 ORDER BY pe.position, pe.id"
        );
        self.query_plan_entries(&sql, params![user, day_plan_id as i64])
    }

    fn query_plan_entries(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<PlanEntry>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let entries = stmt
            .query_map(params, Self::build_plan_entry_from_row)
            .db_context("Failed to query plan entries")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read plan entry row")?;

        Ok(entries)
    }

    /// `user`'s plan for one weekday with its entries, if any.
    pub fn get_day_plan(&self, user: &str, week_day: WeekDay) -> Result<Option<DayPlan>> {
        let plan = self
            .connection
            .query_row(
                SELECT_DAY_PLAN_SQL,
                params![user, week_day.number()],
                Self::build_day_plan_from_row,
            )
            .optional()
            .db_context("Failed to query day plan")?;

        match plan {
            Some(mut plan) => {
                plan.entries = self.day_plan_entries(user, plan.id)?;
                Ok(Some(plan))
            }
            None => Ok(None),
        }
    }

    /// All of `user`'s day plans ordered by weekday, each with its entries.
    pub fn list_day_plans(&self, user: &str) -> Result<Vec<DayPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DAY_PLANS_SQL)
            .db_context("Failed to prepare query")?;

        let mut plans = stmt
            .query_map(params![user], Self::build_day_plan_from_row)
            .db_context("Failed to query day plans")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read day plan row")?;

        for entry in self.list_plan_entries(user)? {
            if let Some(plan) = plans.iter_mut().find(|p| p.id == entry.day_plan_id) {
                plan.entries.push(entry);
            }
        }

        Ok(plans)
    }
}
