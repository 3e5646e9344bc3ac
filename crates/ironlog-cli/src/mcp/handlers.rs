//! MCP tool handlers implementation

use std::{fmt::Display, sync::Arc};

use ironlog_core::{params as core, Tracker};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types derive JsonSchema behind the `schema` feature but know
// nothing about MCP. The transparent wrapper below gives every one of them
// the schema and deserialization the tool router needs.

/// Generic MCP wrapper for core parameter types
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type CreateExercise = McpParams<core::CreateExercise>;
pub type AddPlanEntry = McpParams<core::AddPlanEntry>;
pub type PlanDay = McpParams<core::PlanDay>;
pub type LogExecution = McpParams<core::LogExecution>;
pub type ExecutionHistory = McpParams<core::ExecutionHistory>;
pub type LogCardio = McpParams<core::LogCardio>;
pub type SaveDailyLog = McpParams<core::SaveDailyLog>;
pub type DayOf = McpParams<core::DayOf>;
pub type WeekOf = McpParams<core::WeekOf>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(output: impl Display) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>) -> Self {
        Self { tracker }
    }

    pub async fn create_exercise(
        &self,
        Parameters(params): Parameters<CreateExercise>,
    ) -> McpResult {
        debug!("create_exercise: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .create_exercise_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create exercise", &e))?;
        text_result(result)
    }

    pub async fn list_exercises(&self) -> McpResult {
        debug!("list_exercises");

        let exercises = self
            .tracker
            .lock()
            .await
            .exercise_catalog()
            .await
            .map_err(|e| to_mcp_error("Failed to list exercises", &e))?;
        text_result(format!("# Exercises\n\n{exercises}"))
    }

    pub async fn add_plan_entry(&self, Parameters(params): Parameters<AddPlanEntry>) -> McpResult {
        debug!("add_plan_entry: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .add_plan_entry_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add plan entry", &e))?;
        text_result(result)
    }

    pub async fn weekly_plan(&self) -> McpResult {
        debug!("weekly_plan");

        let plans = self
            .tracker
            .lock()
            .await
            .weekly_plan_view()
            .await
            .map_err(|e| to_mcp_error("Failed to load weekly plan", &e))?;
        text_result(plans)
    }

    pub async fn day_plan(&self, Parameters(params): Parameters<PlanDay>) -> McpResult {
        debug!("day_plan: {params:?}");

        let view = self
            .tracker
            .lock()
            .await
            .day_plan_view(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load day plan", &e))?;
        text_result(view)
    }

    pub async fn log_execution(&self, Parameters(params): Parameters<LogExecution>) -> McpResult {
        debug!("log_execution: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .log_execution_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to log execution", &e))?;
        text_result(result)
    }

    pub async fn execution_history(
        &self,
        Parameters(params): Parameters<ExecutionHistory>,
    ) -> McpResult {
        debug!("execution_history: {params:?}");

        let history = self
            .tracker
            .lock()
            .await
            .execution_history_view(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load execution history", &e))?;
        text_result(history)
    }

    pub async fn log_cardio(&self, Parameters(params): Parameters<LogCardio>) -> McpResult {
        debug!("log_cardio: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .log_cardio_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to log cardio session", &e))?;
        text_result(result)
    }

    pub async fn weekly_cardio(&self, Parameters(params): Parameters<WeekOf>) -> McpResult {
        debug!("weekly_cardio: {params:?}");

        let week = self
            .tracker
            .lock()
            .await
            .weekly_cardio(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load cardio sessions", &e))?;
        text_result(week)
    }

    pub async fn save_daily_log(&self, Parameters(params): Parameters<SaveDailyLog>) -> McpResult {
        debug!("save_daily_log: {params:?}");

        let result = self
            .tracker
            .lock()
            .await
            .save_daily_log_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save daily log", &e))?;
        text_result(result)
    }

    pub async fn daily_log(&self, Parameters(params): Parameters<DayOf>) -> McpResult {
        debug!("daily_log: {params:?}");

        let view = self
            .tracker
            .lock()
            .await
            .daily_log_view(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load daily log", &e))?;
        text_result(view)
    }

    pub async fn weekly_progress(&self, Parameters(params): Parameters<WeekOf>) -> McpResult {
        debug!("weekly_progress: {params:?}");

        let progress = self
            .tracker
            .lock()
            .await
            .weekly_progress(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute weekly progress", &e))?;
        text_result(progress)
    }

    pub async fn seed_demo_data(&self) -> McpResult {
        debug!("seed_demo_data");

        let status = self
            .tracker
            .lock()
            .await
            .seed_demo_data_status()
            .await
            .map_err(|e| to_mcp_error("Failed to seed demo data", &e))?;
        text_result(status)
    }
}
