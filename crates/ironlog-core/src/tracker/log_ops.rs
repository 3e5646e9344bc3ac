//! Activity logging operations for the Tracker: executions, cardio and the
//! daily habit log.

use jiff::Timestamp;

use super::Tracker;
use crate::{
    error::{Result, TrackerError},
    models::{CardioSession, CardioWeek, DailyLog, ExecutionRecord},
    params::{DayOf, ExecutionHistory, LogCardio, LogExecution, SaveDailyLog, WeekOf},
    progress::{total_minutes, WeekWindow},
};

impl Tracker {
    /// Records one execution of an exercise, stamped with the current time.
    pub async fn log_execution(&self, params: &LogExecution) -> Result<ExecutionRecord> {
        params.validate()?;
        let execution = params.clone();

        self.with_database(move |db, user| {
            db.insert_execution(user, &execution, Timestamp::now())
        })
        .await
    }

    /// Most recent executions of one exercise, newest first.
    pub async fn execution_history(
        &self,
        params: &ExecutionHistory,
    ) -> Result<Vec<ExecutionRecord>> {
        let exercise_id = params.exercise_id;
        let limit = params.effective_limit();

        self.with_database(move |db, user| {
            if db.get_exercise(user, exercise_id)?.is_none() {
                return Err(TrackerError::ExerciseNotFound { id: exercise_id });
            }
            db.execution_history(user, exercise_id, limit)
        })
        .await
    }

    /// Records a cardio session starting now.
    pub async fn log_cardio(&self, params: &LogCardio) -> Result<CardioSession> {
        params.validate()?;
        let session = params.clone();

        self.with_database(move |db, user| db.insert_cardio(user, &session, Timestamp::now()))
            .await
    }

    /// Cardio sessions of the requested week with their total duration.
    pub async fn weekly_cardio(&self, params: &WeekOf) -> Result<CardioWeek> {
        let window = params.window()?;
        self.cardio_in_window(&window).await
    }

    /// Cardio sessions inside an explicit week window.
    pub async fn cardio_in_window(&self, window: &WeekWindow) -> Result<CardioWeek> {
        let (start, end) = (window.start_timestamp(), window.end_timestamp());
        let sessions = self
            .with_database(move |db, user| db.cardio_between(user, start, end))
            .await?;

        Ok(CardioWeek {
            week_start: window.first_day(),
            week_end: window.last_day(),
            total_minutes: total_minutes(&sessions),
            sessions,
        })
    }

    /// Creates or updates the habit log of one date (today by default).
    pub async fn save_daily_log(&self, params: &SaveDailyLog) -> Result<DailyLog> {
        let date = params.validate()?;
        let water_liters = params.water_liters;
        let food_intake = params.food_intake;
        let note = params.note.clone();

        self.with_database(move |db, user| {
            db.upsert_daily_log(user, date, water_liters, food_intake, note.as_deref())
        })
        .await
    }

    /// The habit log of one date (today by default), if saved.
    pub async fn daily_log(&self, params: &DayOf) -> Result<Option<DailyLog>> {
        let date = params.resolve()?;
        self.with_database(move |db, user| db.get_daily_log(user, date))
            .await
    }
}
