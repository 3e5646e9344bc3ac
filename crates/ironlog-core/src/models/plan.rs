//! Weekly plan models: one day plan per weekday, each holding ordered entries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{ExecutionMode, Exercise, WeekDay, WorkoutKind};

/// The plan for one day of the week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Unique identifier for the day plan
    pub id: u64,

    /// Day of the week this plan applies to
    pub week_day: WeekDay,

    /// Display name, e.g. "Chest/Core"
    pub name: String,

    /// Timestamp when the day plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the day plan was last renamed or extended (UTC)
    pub updated_at: Timestamp,

    /// Entries ordered by position
    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

/// One exercise slot within a day plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanEntry {
    /// Unique identifier for the entry
    pub id: u64,

    /// Owning day plan
    pub day_plan_id: u64,

    /// Day of the week, copied from the owning day plan
    pub week_day: WeekDay,

    /// The planned exercise
    pub exercise: Exercise,

    /// Kind of training prescribed
    pub kind: WorkoutKind,

    /// Mode-specific targets
    pub targets: PlanTargets,

    /// 0-based position within the day plan
    pub position: u32,

    /// Timestamp when the entry was added (UTC)
    pub created_at: Timestamp,
}

/// Targets of a plan entry. Only the fields meaningful for the entry's
/// execution mode exist.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PlanTargets {
    /// Sets of repetitions, optionally at a target weight (kg)
    Reps {
        sets: u32,
        reps: u32,
        weight: Option<f64>,
        rest_seconds: u32,
    },
    /// Sets of timed holds
    Timed {
        sets: u32,
        duration_sec: u32,
        rest_seconds: u32,
    },
    /// A weekly cardio volume
    Cardio { weekly_minutes: u32 },
}

impl PlanTargets {
    /// The execution mode these targets belong to.
    pub fn mode(&self) -> ExecutionMode {
        match self {
            PlanTargets::Reps { .. } => ExecutionMode::Reps,
            PlanTargets::Timed { .. } => ExecutionMode::Timed,
            PlanTargets::Cardio { .. } => ExecutionMode::Cardio,
        }
    }

    /// Target set count; cardio entries have none.
    pub fn sets(&self) -> Option<u32> {
        match self {
            PlanTargets::Reps { sets, .. } | PlanTargets::Timed { sets, .. } => Some(*sets),
            PlanTargets::Cardio { .. } => None,
        }
    }

    /// Weekly cardio minutes; only cardio entries have them.
    pub fn weekly_minutes(&self) -> Option<u32> {
        match self {
            PlanTargets::Cardio { weekly_minutes } => Some(*weekly_minutes),
            _ => None,
        }
    }
}
