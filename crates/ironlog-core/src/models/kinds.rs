//! Tag enumerations shared by exercises, plan entries, executions and daily
//! logs.

use std::{fmt, str::FromStr};

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How an exercise is performed and therefore which metrics describe one
/// execution of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExecutionType {
    /// Load-based strength work: reps at a weight
    Load,
    /// Bodyweight repetitions
    Bodyweight,
    /// Timed hold, measured in seconds
    Timed,
    /// Continuous cardio, measured in seconds
    Cardio,
}

impl ExecutionType {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionType::Load => "load",
            ExecutionType::Bodyweight => "bodyweight",
            ExecutionType::Timed => "timed",
            ExecutionType::Cardio => "cardio",
        }
    }
}

impl FromStr for ExecutionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "load" => Ok(ExecutionType::Load),
            "bodyweight" => Ok(ExecutionType::Bodyweight),
            "timed" => Ok(ExecutionType::Timed),
            "cardio" => Ok(ExecutionType::Cardio),
            _ => Err(format!("Invalid execution type: {s}")),
        }
    }
}

/// The kind of training a plan entry prescribes. Decides which targets a
/// plan entry must carry and, when the exercise has to be created on the
/// fly, its execution type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Strength,
    Bodyweight,
    Timed,
    Cardio,
}

impl WorkoutKind {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Strength => "strength",
            WorkoutKind::Bodyweight => "bodyweight",
            WorkoutKind::Timed => "timed",
            WorkoutKind::Cardio => "cardio",
        }
    }

    /// Execution type given to exercises created for this kind of work.
    pub fn execution_type(&self) -> ExecutionType {
        match self {
            WorkoutKind::Strength => ExecutionType::Load,
            WorkoutKind::Bodyweight => ExecutionType::Bodyweight,
            WorkoutKind::Timed => ExecutionType::Timed,
            WorkoutKind::Cardio => ExecutionType::Cardio,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(WorkoutKind::Strength),
            "bodyweight" => Ok(WorkoutKind::Bodyweight),
            "timed" => Ok(WorkoutKind::Timed),
            "cardio" => Ok(WorkoutKind::Cardio),
            _ => Err(format!("Invalid workout kind: {s}")),
        }
    }
}

/// Which family of targets a plan entry is measured by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Reps,
    Timed,
    Cardio,
}

impl ExecutionMode {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Reps => "reps",
            ExecutionMode::Timed => "timed",
            ExecutionMode::Cardio => "cardio",
        }
    }
}

impl FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reps" => Ok(ExecutionMode::Reps),
            "timed" => Ok(ExecutionMode::Timed),
            "cardio" => Ok(ExecutionMode::Cardio),
            _ => Err(format!("Invalid execution mode: {s}")),
        }
    }
}

/// Ordinal food-adherence level recorded in a daily log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum FoodIntake {
    WithinDiet,
    SlightlyOver,
    Over,
    OffDiet,
}

impl FoodIntake {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodIntake::WithinDiet => "within_diet",
            FoodIntake::SlightlyOver => "slightly_over",
            FoodIntake::Over => "over",
            FoodIntake::OffDiet => "off_diet",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FoodIntake::WithinDiet => "Within diet",
            FoodIntake::SlightlyOver => "Slightly over",
            FoodIntake::Over => "Over",
            FoodIntake::OffDiet => "Off diet",
        }
    }
}

impl FromStr for FoodIntake {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "within_diet" => Ok(FoodIntake::WithinDiet),
            "slightly_over" => Ok(FoodIntake::SlightlyOver),
            "over" => Ok(FoodIntake::Over),
            "off_diet" => Ok(FoodIntake::OffDiet),
            _ => Err(format!("Invalid food intake level: {s}")),
        }
    }
}

/// Day of the week, Sunday = 0 through Saturday = 6.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekDay(u8);

impl WeekDay {
    pub const SUNDAY: WeekDay = WeekDay(0);
    pub const MONDAY: WeekDay = WeekDay(1);
    pub const WEDNESDAY: WeekDay = WeekDay(3);
    pub const FRIDAY: WeekDay = WeekDay(5);

    const NAMES: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    /// The day number, 0..=6.
    pub fn number(&self) -> u8 {
        self.0
    }

    /// English day name.
    pub fn name(&self) -> &'static str {
        Self::NAMES[usize::from(self.0)]
    }
}

impl TryFrom<u8> for WeekDay {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 6 {
            Ok(WeekDay(value))
        } else {
            Err(format!("Invalid day of week: {value} (expected 0-6)"))
        }
    }
}

impl From<WeekDay> for u8 {
    fn from(day: WeekDay) -> Self {
        day.0
    }
}

impl From<jiff::civil::Weekday> for WeekDay {
    fn from(weekday: jiff::civil::Weekday) -> Self {
        // to_sunday_zero_offset is always within 0..=6
        WeekDay(weekday.to_sunday_zero_offset().unsigned_abs())
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
