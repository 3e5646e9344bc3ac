//! Weekly progress summaries produced by the aggregator.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::CardioSession;

/// Planned versus executed sets for one muscle group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MuscleGroupProgress {
    pub muscle_group: String,
    /// Sum of the target sets of every plan entry in the group
    pub target_sets: u32,
    /// Execution records this week for exercises of the group
    pub executed_sets: u32,
    /// Completion in `0..=100`
    pub percent: u8,
}

/// Cardio minutes this week against the weekly target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardioProgress {
    pub total_minutes: u32,
    pub target_minutes: u32,
    /// Completion in `0..=100`
    pub percent: u8,
}

/// Everything the progress view needs for one week.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyProgress {
    /// Monday of the week
    pub week_start: Date,
    /// Sunday of the week
    pub week_end: Date,
    pub groups: Vec<MuscleGroupProgress>,
    pub cardio: CardioProgress,
}

/// Cardio sessions of one week with their summed duration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardioWeek {
    pub week_start: Date,
    pub week_end: Date,
    pub total_minutes: u32,
    pub sessions: Vec<CardioSession>,
}
