//! Handler operations that return display wrapper types, shared by the CLI
//! and the MCP server so both print identical markdown.

use super::Tracker;
use crate::{
    display::{CreateResult, DayPlans, Executions, Exercises, OperationStatus},
    error::{Result, TrackerError},
    models::{CardioSession, DailyLog, ExecutionRecord, Exercise, PlanEntry, WeekDay},
    params::{
        AddPlanEntry, CreateExercise, DayOf, ExecutionHistory, LogCardio, LogExecution, PlanDay,
        SaveDailyLog,
    },
};

impl Tracker {
    /// Handle creating an exercise, wrapped for display.
    pub async fn create_exercise_result(
        &self,
        params: &CreateExercise,
    ) -> Result<CreateResult<Exercise>> {
        self.create_exercise(params).await.map(CreateResult::new)
    }

    /// Handle listing the exercise catalog.
    pub async fn exercise_catalog(&self) -> Result<Exercises> {
        self.list_exercises().await.map(Exercises)
    }

    /// Handle adding a plan entry, wrapped for display.
    pub async fn add_plan_entry_result(
        &self,
        params: &AddPlanEntry,
    ) -> Result<CreateResult<PlanEntry>> {
        self.add_plan_entry(params).await.map(CreateResult::new)
    }

    /// Handle showing the whole weekly plan.
    pub async fn weekly_plan_view(&self) -> Result<DayPlans> {
        self.weekly_plan().await.map(DayPlans)
    }

    /// Handle showing one day's plan, today when no day is given. Returns
    /// the rendered plan or a status line when the day has none.
    pub async fn day_plan_view(&self, params: &PlanDay) -> Result<String> {
        let plan = match params.week_day {
            Some(day) => {
                let week_day = WeekDay::try_from(day).map_err(|reason| {
                    TrackerError::invalid_input("week_day").with_reason(reason)
                })?;
                self.day_plan(week_day).await?
            }
            None => self.today_plan().await?,
        };

        Ok(match plan {
            Some(plan) => plan.to_string(),
            None => OperationStatus::failure("No plan for this day".to_string()).to_string(),
        })
    }

    /// Handle logging an execution, wrapped for display.
    pub async fn log_execution_result(
        &self,
        params: &LogExecution,
    ) -> Result<CreateResult<ExecutionRecord>> {
        self.log_execution(params).await.map(CreateResult::new)
    }

    /// Handle listing an exercise's recent executions.
    pub async fn execution_history_view(&self, params: &ExecutionHistory) -> Result<Executions> {
        self.execution_history(params).await.map(Executions)
    }

    /// Handle logging a cardio session, wrapped for display.
    pub async fn log_cardio_result(
        &self,
        params: &LogCardio,
    ) -> Result<CreateResult<CardioSession>> {
        self.log_cardio(params).await.map(CreateResult::new)
    }

    /// Handle saving a daily log, wrapped for display.
    pub async fn save_daily_log_result(
        &self,
        params: &SaveDailyLog,
    ) -> Result<CreateResult<DailyLog>> {
        self.save_daily_log(params).await.map(CreateResult::new)
    }

    /// Handle showing a daily log, or a status line when none was saved.
    pub async fn daily_log_view(&self, params: &DayOf) -> Result<String> {
        Ok(match self.daily_log(params).await? {
            Some(log) => log.to_string(),
            None => OperationStatus::failure("No daily log for this date".to_string()).to_string(),
        })
    }

    /// Handle seeding demo data, reporting what happened.
    pub async fn seed_demo_data_status(&self) -> Result<OperationStatus> {
        Ok(match self.seed_demo_data().await? {
            Some(summary) => OperationStatus::success(summary.to_string()),
            None => OperationStatus::failure(
                "Demo data not added: this user already has exercises".to_string(),
            ),
        })
    }
}
