//! Parameter structures for tracker operations.
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation for the MCP layer is available behind the
//! `schema` feature. Dates travel as `YYYY-MM-DD` strings so the structures
//! stay schema-friendly; each one validates and converts itself before the
//! tracker touches the store.

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{ExecutionType, FoodIntake, PlanTargets, WeekDay, WorkoutKind},
    progress::WeekWindow,
};

/// Upper bound on execution history requests.
pub const MAX_HISTORY_LIMIT: u32 = 50;

/// Execution history length when none is requested.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Upper bound on the sets of one plan entry.
pub const MAX_PLANNED_SETS: u32 = 100;

/// Minutes in a week, the upper bound on a weekly cardio target.
pub const MAX_WEEKLY_MINUTES: u32 = 7 * 24 * 60;

/// Minutes in a day, the upper bound on one cardio session.
pub const MAX_SESSION_MINUTES: u32 = 24 * 60;

/// Parameters for adding an exercise to the user's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateExercise {
    /// Display name (at least 2 characters)
    pub name: String,
    /// Muscle-group tag (at least 2 characters)
    pub muscle_group: String,
    /// How executions of this exercise are measured
    pub execution_type: ExecutionType,
}

impl CreateExercise {
    /// Checks name and muscle group lengths.
    pub fn validate(&self) -> Result<()> {
        require_min_chars("name", &self.name, 2)?;
        require_min_chars("muscle_group", &self.muscle_group, 2)
    }
}

/// Parameters for appending an exercise to the plan of one weekday.
///
/// Which targets are required depends on `kind`:
/// strength and bodyweight need `sets`, `reps` and `rest_seconds`; timed
/// needs `sets`, `duration_sec` and `rest_seconds`; cardio needs
/// `weekly_minutes`. Targets irrelevant to the kind are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlanEntry {
    /// Day of the week, 0 = Sunday through 6 = Saturday
    pub week_day: u8,
    /// Optional new name for that day's plan
    pub plan_name: Option<String>,
    /// Existing exercise to use; looked up by `exercise_name` when absent
    pub exercise_id: Option<u64>,
    /// Exercise name, also used when the exercise has to be created
    pub exercise_name: String,
    /// Muscle group for a newly created exercise
    pub muscle_group: String,
    /// Kind of training prescribed
    pub kind: WorkoutKind,
    /// Target number of sets
    pub sets: Option<u32>,
    /// Target repetitions per set
    pub reps: Option<u32>,
    /// Target weight in kilograms
    pub weight: Option<f64>,
    /// Target seconds per set
    pub duration_sec: Option<u32>,
    /// Rest between sets in seconds
    pub rest_seconds: Option<u32>,
    /// Weekly cardio target in minutes
    pub weekly_minutes: Option<u32>,
}

impl AddPlanEntry {
    /// Validates the request and returns the weekday and the targets to
    /// store.
    pub fn validate(&self) -> Result<(WeekDay, PlanTargets)> {
        let week_day = WeekDay::try_from(self.week_day)
            .map_err(|reason| TrackerError::invalid_input("week_day").with_reason(reason))?;
        require_min_chars("exercise_name", &self.exercise_name, 2)?;
        require_min_chars("muscle_group", &self.muscle_group, 2)?;
        if let Some(name) = &self.plan_name {
            require_min_chars("plan_name", name, 1)?;
        }

        let targets = match self.kind {
            WorkoutKind::Strength | WorkoutKind::Bodyweight => PlanTargets::Reps {
                sets: require_bounded("sets", self.sets, MAX_PLANNED_SETS)?,
                reps: require_positive("reps", self.reps)?,
                weight: match self.weight {
                    Some(w) if !(w.is_finite() && w > 0.0) => {
                        return Err(TrackerError::invalid_input("weight")
                            .with_reason("must be a positive number"));
                    }
                    other => other,
                },
                rest_seconds: require_present("rest_seconds", self.rest_seconds)?,
            },
            WorkoutKind::Timed => PlanTargets::Timed {
                sets: require_bounded("sets", self.sets, MAX_PLANNED_SETS)?,
                duration_sec: require_positive("duration_sec", self.duration_sec)?,
                rest_seconds: require_present("rest_seconds", self.rest_seconds)?,
            },
            WorkoutKind::Cardio => PlanTargets::Cardio {
                weekly_minutes: require_bounded(
                    "weekly_minutes",
                    self.weekly_minutes,
                    MAX_WEEKLY_MINUTES,
                )?,
            },
        };

        Ok((week_day, targets))
    }
}

/// Parameters for showing one day's plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanDay {
    /// Day of the week (0 = Sunday … 6 = Saturday); today when omitted
    pub week_day: Option<u8>,
}

/// Parameters for logging one completed set or session of an exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogExecution {
    /// Exercise that was performed
    pub exercise_id: u64,
    /// Plan entry this execution fulfils, if any
    pub plan_entry_id: Option<u64>,
    /// How the execution is measured
    pub execution_type: ExecutionType,
    /// Repetitions performed
    pub reps: Option<u32>,
    /// Weight lifted in kilograms
    pub weight: Option<f64>,
    /// Duration in seconds
    pub duration_sec: Option<u32>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl LogExecution {
    /// Rejects zero or negative metrics.
    pub fn validate(&self) -> Result<()> {
        if self.reps == Some(0) {
            return Err(TrackerError::invalid_input("reps").with_reason("must be positive"));
        }
        if self.weight.is_some_and(|w| !(w.is_finite() && w > 0.0)) {
            return Err(TrackerError::invalid_input("weight").with_reason("must be positive"));
        }
        if self.duration_sec == Some(0) {
            return Err(
                TrackerError::invalid_input("duration_sec").with_reason("must be positive")
            );
        }
        Ok(())
    }
}

/// Parameters for listing recent executions of one exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ExecutionHistory {
    /// Exercise whose history to list
    pub exercise_id: u64,
    /// Number of records (default 10, at most 50)
    pub limit: Option<u32>,
}

impl ExecutionHistory {
    /// The requested limit, defaulted and capped.
    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT)
            .min(MAX_HISTORY_LIMIT)
    }
}

/// Parameters for recording a cardio session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogCardio {
    /// Activity, e.g. "Run" or "Bike" (at least 2 characters)
    pub modality: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Distance covered in kilometres
    pub distance_km: Option<f64>,
    /// Free-text notes
    pub notes: Option<String>,
}

impl LogCardio {
    /// Checks modality, duration and distance.
    pub fn validate(&self) -> Result<()> {
        require_min_chars("modality", &self.modality, 2)?;
        require_bounded(
            "duration_minutes",
            Some(self.duration_minutes),
            MAX_SESSION_MINUTES,
        )?;
        if self.distance_km.is_some_and(|d| !(d.is_finite() && d > 0.0)) {
            return Err(
                TrackerError::invalid_input("distance_km").with_reason("must be positive")
            );
        }
        Ok(())
    }
}

/// Parameters for creating or updating a day's habit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SaveDailyLog {
    /// Calendar date as YYYY-MM-DD; today when omitted
    pub date: Option<String>,
    /// Water intake in liters
    pub water_liters: f64,
    /// Diet adherence for the day
    pub food_intake: FoodIntake,
    /// Free-text note; an omitted note keeps the stored one
    pub note: Option<String>,
}

impl SaveDailyLog {
    /// Validates the request and resolves the date it applies to.
    pub fn validate(&self) -> Result<Date> {
        if !(self.water_liters.is_finite() && self.water_liters >= 0.0) {
            return Err(TrackerError::invalid_input("water_liters")
                .with_reason("must be zero or a positive number"));
        }
        resolve_date("date", self.date.as_deref())
    }
}

/// Parameters naming a calendar day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayOf {
    /// Calendar date as YYYY-MM-DD; today when omitted
    pub date: Option<String>,
}

impl DayOf {
    /// The date this request refers to.
    pub fn resolve(&self) -> Result<Date> {
        resolve_date("date", self.date.as_deref())
    }
}

/// Parameters naming a week by any date inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WeekOf {
    /// Any date in the week as YYYY-MM-DD; the current week when omitted
    pub date: Option<String>,
}

impl WeekOf {
    /// The Monday-to-Sunday window this request refers to, in the system
    /// time zone.
    pub fn window(&self) -> Result<WeekWindow> {
        match self.date.as_deref() {
            Some(raw) => WeekWindow::of_date(parse_date("date", raw)?),
            None => WeekWindow::current(),
        }
    }
}

fn resolve_date(field: &str, raw: Option<&str>) -> Result<Date> {
    match raw {
        Some(raw) => parse_date(field, raw),
        None => Ok(jiff::Zoned::now().date()),
    }
}

fn parse_date(field: &str, raw: &str) -> Result<Date> {
    raw.trim().parse::<Date>().map_err(|e| {
        TrackerError::invalid_input(field).with_reason(format!("expected YYYY-MM-DD: {e}"))
    })
}

fn require_min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(TrackerError::invalid_input(field)
            .with_reason(format!("must be at least {min} characters")));
    }
    Ok(())
}

fn require_present(field: &str, value: Option<u32>) -> Result<u32> {
    value.ok_or_else(|| TrackerError::invalid_input(field).with_reason("is required"))
}

fn require_positive(field: &str, value: Option<u32>) -> Result<u32> {
    match value {
        Some(v) if v >= 1 => Ok(v),
        Some(_) => Err(TrackerError::invalid_input(field).with_reason("must be at least 1")),
        None => Err(TrackerError::invalid_input(field).with_reason("is required")),
    }
}

fn require_bounded(field: &str, value: Option<u32>, max: u32) -> Result<u32> {
    let value = require_positive(field, value)?;
    if value > max {
        return Err(TrackerError::invalid_input(field).with_reason(format!("must be at most {max}")));
    }
    Ok(value)
}
