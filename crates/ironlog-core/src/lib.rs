//! Core library for the ironlog workout tracker.
//!
//! This crate holds the business logic behind the `ironlog` CLI and MCP
//! server: the exercise catalog, weekly plans, execution and cardio logs,
//! daily habit logs and the weekly progress computation.
//!
//! # Layout
//!
//! - **Models** ([`models`]): plain data types
//! - **Progress** ([`progress`]): week boundaries and planned-versus-executed
//!   aggregation, free of I/O
//! - **Display** ([`display`]): markdown `Display` impls and wrappers
//! - **Tracker** ([`Tracker`]): async facade over the SQLite store
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use ironlog_core::{
//!     models::{ExecutionType, WorkoutKind},
//!     params::{AddPlanEntry, LogExecution, WeekOf},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("ironlog.db"))
//!     .build()
//!     .await?;
//!
//! let entry = tracker
//!     .add_plan_entry(&AddPlanEntry {
//!         week_day: 1,
//!         plan_name: Some("Push".to_string()),
//!         exercise_id: None,
//!         exercise_name: "Bench press".to_string(),
//!         muscle_group: "Chest".to_string(),
//!         kind: WorkoutKind::Strength,
//!         sets: Some(4),
//!         reps: Some(8),
//!         weight: Some(60.0),
//!         duration_sec: None,
//!         rest_seconds: Some(120),
//!         weekly_minutes: None,
//!     })
//!     .await?;
//!
//! tracker
//!     .log_execution(&LogExecution {
//!         exercise_id: entry.exercise.id,
//!         plan_entry_id: Some(entry.id),
//!         execution_type: ExecutionType::Load,
//!         reps: Some(8),
//!         weight: Some(60.0),
//!         duration_sec: None,
//!         notes: None,
//!     })
//!     .await?;
//!
//! println!("{}", tracker.weekly_progress(&WeekOf::default()).await?);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod progress;
pub mod tracker;

pub use db::Database;
pub use display::{
    format_execution, CreateResult, DayPlans, Executions, Exercises, LocalDateTime,
    OperationStatus,
};
pub use error::{Result, TrackerError};
pub use models::{
    CardioProgress, CardioSession, CardioWeek, DailyLog, DayPlan, ExecutionMode, ExecutionRecord,
    ExecutionType, Exercise, FoodIntake, MuscleGroupProgress, PlanEntry, PlanTargets, WeekDay,
    WeeklyProgress, WorkoutKind,
};
pub use params::{
    AddPlanEntry, CreateExercise, DayOf, ExecutionHistory, LogCardio, LogExecution, PlanDay,
    SaveDailyLog, WeekOf,
};
pub use progress::{cardio_progress, muscle_group_progress, PlannedSets, WeekWindow};
pub use tracker::{SeedSummary, Tracker, TrackerBuilder};
