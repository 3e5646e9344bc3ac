//! Weekly progress computation.
//!
//! Pure functions over already-fetched, user-scoped collections. The
//! [`crate::Tracker`] reads the plan, this week's executions and this week's
//! cardio sessions from the store, then hands them to these functions:
//!
//! ```text
//! plan entries ──┐
//! executions ────┼─▶ muscle_group_progress ─┐
//!                │                          ├─▶ WeeklyProgress
//! cardio ────────┴─▶ cardio_progress ───────┘
//!          (all restricted to WeekWindow)
//! ```

pub mod aggregate;
pub mod week;

pub use aggregate::{
    cardio_progress, muscle_group_progress, total_minutes, PlannedSets,
    DEFAULT_WEEKLY_CARDIO_MINUTES,
};
pub use week::WeekWindow;
