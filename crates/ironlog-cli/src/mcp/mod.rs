//! MCP server implementation for ironlog
//!
//! Exposes the tracker over the Model Context Protocol on stdio so AI
//! assistants can plan workouts, log sets and read weekly progress. Every
//! tool returns the same markdown the CLI prints.

use std::sync::Arc;

use anyhow::Result;
use ironlog_core::Tracker;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddPlanEntry, CreateExercise, DayOf, ExecutionHistory, LogCardio, LogExecution, McpResult,
    PlanDay, SaveDailyLog, WeekOf,
};

const INSTRUCTIONS: &str = r#"ironlog is a weekly workout planner and training log. All data belongs to the user the server was started for.

## Core Concepts
- **Exercises**: name, muscle group and execution type (load, bodyweight, timed, cardio). Global exercises are shared by every user.
- **Day plans**: one plan per weekday (0 = Sunday ... 6 = Saturday) holding ordered entries with targets (sets x reps @ weight, sets x seconds, or weekly cardio minutes).
- **Executions**: one logged set of an exercise. Each execution counts as one completed set.
- **Cardio sessions** and **daily logs** (water, food adherence, note).

## Workflow
1. Build the plan with `add_plan_entry`; unknown exercise names are created on the fly.
2. Check what is due with `day_plan` (today when `week_day` is omitted) or `weekly_plan`.
3. Record work with `log_execution` and `log_cardio`.
4. Review with `weekly_progress`: completed versus planned sets per muscle group, and cardio minutes against the weekly target.

Use `seed_demo_data` to fill an empty account with an example week. Dates are YYYY-MM-DD; weeks run Monday to Sunday."#;

/// MCP server for ironlog
#[derive(Clone)]
pub struct IronlogMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl IronlogMcpServer {
    /// Create a new ironlog MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_exercise",
        description = "Add an exercise to the user's catalog. Requires name and muscle_group (at least 2 characters each) and execution_type: 'load', 'bodyweight', 'timed' or 'cardio'. Returns the new exercise ID."
    )]
    async fn create_exercise(&self, params: Parameters<CreateExercise>) -> McpResult {
        self.handlers().create_exercise(params).await
    }

    #[tool(
        name = "list_exercises",
        description = "List the user's exercises together with the global catalog, ordered by name, with IDs, muscle groups and execution types."
    )]
    async fn list_exercises(&self) -> McpResult {
        self.handlers().list_exercises().await
    }

    #[tool(
        name = "add_plan_entry",
        description = "Append an exercise to the plan of one weekday (week_day 0 = Sunday ... 6 = Saturday). The exercise is taken from exercise_id, else found by exercise_name among the user's exercises, else created with muscle_group. kind decides the required targets: 'strength'/'bodyweight' need sets, reps and rest_seconds (weight optional); 'timed' needs sets, duration_sec and rest_seconds; 'cardio' needs weekly_minutes. plan_name optionally renames the day's plan."
    )]
    async fn add_plan_entry(&self, params: Parameters<AddPlanEntry>) -> McpResult {
        self.handlers().add_plan_entry(params).await
    }

    #[tool(
        name = "weekly_plan",
        description = "Show every day plan of the week in weekday order with its entries, targets, entry IDs and exercise IDs."
    )]
    async fn weekly_plan(&self) -> McpResult {
        self.handlers().weekly_plan().await
    }

    #[tool(
        name = "day_plan",
        description = "Show the plan of one weekday (0 = Sunday ... 6 = Saturday), or of today when week_day is omitted."
    )]
    async fn day_plan(&self, params: Parameters<PlanDay>) -> McpResult {
        self.handlers().day_plan(params).await
    }

    #[tool(
        name = "log_execution",
        description = "Record one completed set of an exercise, timestamped now. Requires exercise_id and execution_type; optionally plan_entry_id, reps, weight (kg), duration_sec and notes. Each call counts as one set in weekly progress."
    )]
    async fn log_execution(&self, params: Parameters<LogExecution>) -> McpResult {
        self.handlers().log_execution(params).await
    }

    #[tool(
        name = "execution_history",
        description = "List the most recent executions of one exercise, newest first. limit defaults to 10 and is capped at 50."
    )]
    async fn execution_history(&self, params: Parameters<ExecutionHistory>) -> McpResult {
        self.handlers().execution_history(params).await
    }

    #[tool(
        name = "log_cardio",
        description = "Record a cardio session, timestamped now. Requires modality (e.g. 'Run') and duration_minutes; optionally distance_km and notes."
    )]
    async fn log_cardio(&self, params: Parameters<LogCardio>) -> McpResult {
        self.handlers().log_cardio(params).await
    }

    #[tool(
        name = "weekly_cardio",
        description = "List the cardio sessions of a Monday-to-Sunday week and their total minutes. date is any YYYY-MM-DD inside the week; the current week when omitted."
    )]
    async fn weekly_cardio(&self, params: Parameters<WeekOf>) -> McpResult {
        self.handlers().weekly_cardio(params).await
    }

    #[tool(
        name = "save_daily_log",
        description = "Save the habit log of a day (date YYYY-MM-DD, today when omitted): water_liters and food_intake ('within_diet', 'slightly_over', 'over', 'off_diet'). Saving again replaces water and food; an omitted note keeps the stored note."
    )]
    async fn save_daily_log(&self, params: Parameters<SaveDailyLog>) -> McpResult {
        self.handlers().save_daily_log(params).await
    }

    #[tool(
        name = "daily_log",
        description = "Show the habit log of a day (date YYYY-MM-DD, today when omitted)."
    )]
    async fn daily_log(&self, params: Parameters<DayOf>) -> McpResult {
        self.handlers().daily_log(params).await
    }

    #[tool(
        name = "weekly_progress",
        description = "Compare planned and executed work for a Monday-to-Sunday week: completed versus target sets per muscle group, and cardio minutes against the weekly target (the plan's cardio minutes, else the configured default). date is any YYYY-MM-DD inside the week; the current week when omitted."
    )]
    async fn weekly_progress(&self, params: Parameters<WeekOf>) -> McpResult {
        self.handlers().weekly_progress(params).await
    }

    #[tool(
        name = "seed_demo_data",
        description = "Fill an empty account with a demo exercise catalog, a Monday/Wednesday/Friday plan and a few logs. Does nothing when the user already has exercises."
    )]
    async fn seed_demo_data(&self) -> McpResult {
        self.handlers().seed_demo_data().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for IronlogMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ironlog".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: IronlogMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting ironlog MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use ironlog_core::TrackerBuilder;
    use tempfile::TempDir;

    use super::*;

    async fn create_test_server() -> (TempDir, IronlogMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .build()
            .await
            .expect("Failed to create tracker");
        (temp_dir, IronlogMcpServer::new(tracker))
    }

    #[tokio::test]
    async fn test_every_operation_is_a_tool() {
        let (_temp_dir, server) = create_test_server().await;

        let mut names: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            [
                "add_plan_entry",
                "create_exercise",
                "daily_log",
                "day_plan",
                "execution_history",
                "list_exercises",
                "log_cardio",
                "log_execution",
                "save_daily_log",
                "seed_demo_data",
                "weekly_cardio",
                "weekly_plan",
                "weekly_progress",
            ]
        );
    }

    #[tokio::test]
    async fn test_server_info_advertises_tools() {
        let (_temp_dir, server) = create_test_server().await;
        let info = server.get_info();

        assert_eq!(info.server_info.name, "ironlog");
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some_and(|text| text.contains("weekly_progress")));
    }
}
