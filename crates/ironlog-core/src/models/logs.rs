//! Append-only activity records and the per-day habit log.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{ExecutionType, FoodIntake};

/// One completed instance of an exercise. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExecutionRecord {
    pub id: u64,
    pub exercise_id: u64,
    /// The plan entry this execution fulfilled, if any
    pub plan_entry_id: Option<u64>,
    pub execution_type: ExecutionType,
    pub reps: Option<u32>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    /// Duration in seconds (timed holds and continuous cardio)
    pub duration_sec: Option<u32>,
    pub notes: Option<String>,
    pub executed_at: Timestamp,
}

/// A cardio activity recorded independently of the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardioSession {
    pub id: u64,
    /// Free text, e.g. "Run" or "Bike"
    pub modality: String,
    pub duration_minutes: u32,
    pub distance_km: Option<f64>,
    pub notes: Option<String>,
    pub started_at: Timestamp,
}

/// Hydration and diet adherence for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyLog {
    pub id: u64,
    pub date: Date,
    pub water_liters: f64,
    pub food_intake: FoodIntake,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
