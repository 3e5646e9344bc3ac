//! Data models for the workout tracker.
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so presentation stays out of the data
//! definitions.
//!
//! # Examples
//!
//! ```rust
//! use ironlog_core::models::{ExecutionType, Exercise};
//! use jiff::Timestamp;
//!
//! let exercise = Exercise {
//!     id: 1,
//!     name: "Bench press".to_string(),
//!     muscle_group: "Chest".to_string(),
//!     execution_type: ExecutionType::Load,
//!     owner: Some("local".to_string()),
//!     created_at: Timestamp::now(),
//! };
//! assert!(!exercise.is_global());
//! println!("{}", exercise);
//! ```

pub mod exercise;
pub mod kinds;
pub mod logs;
pub mod plan;
pub mod progress;

pub use exercise::Exercise;
pub use kinds::{ExecutionMode, ExecutionType, FoodIntake, WeekDay, WorkoutKind};
pub use logs::{CardioSession, DailyLog, ExecutionRecord};
pub use plan::{DayPlan, PlanEntry, PlanTargets};
pub use progress::{CardioProgress, CardioWeek, MuscleGroupProgress, WeeklyProgress};
