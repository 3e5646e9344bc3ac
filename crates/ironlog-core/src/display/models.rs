//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it to the terminal
//! renderer and the MCP server can return it as text unchanged.

use std::fmt;

use super::{datetime::LocalDateTime, execution::ExecutionSummary};
use crate::models::{
    CardioProgress, CardioSession, CardioWeek, DailyLog, DayPlan, ExecutionMode, ExecutionRecord,
    ExecutionType, Exercise, FoodIntake, MuscleGroupProgress, PlanEntry, PlanTargets,
    WeeklyProgress, WorkoutKind,
};
use crate::tracker::SeedSummary;

impl fmt::Display for ExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FoodIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- **{}** (ID: {}): {}, {}",
            self.name, self.id, self.muscle_group, self.execution_type
        )?;
        if self.is_global() {
            write!(f, " [global]")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanTargets::Reps {
                sets,
                reps,
                weight,
                rest_seconds,
            } => {
                write!(f, "{sets} x {reps}")?;
                if let Some(weight) = weight {
                    write!(f, " @ {weight}kg")?;
                }
                write!(f, ", rest {rest_seconds}s")
            }
            PlanTargets::Timed {
                sets,
                duration_sec,
                rest_seconds,
            } => write!(f, "{sets} x {duration_sec}s, rest {rest_seconds}s"),
            PlanTargets::Cardio { weekly_minutes } => write!(f, "{weekly_minutes} min/week"),
        }
    }
}

impl fmt::Display for PlanEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}. **{}** ({}): {} _(entry {}, exercise {})_",
            self.position + 1,
            self.exercise.name,
            self.exercise.muscle_group,
            self.targets,
            self.id,
            self.exercise.id
        )
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}: {} (ID: {})", self.week_day, self.name, self.id)?;
        writeln!(f)?;

        if self.entries.is_empty() {
            writeln!(f, "No exercises planned.")?;
        } else {
            for entry in &self.entries {
                write!(f, "{entry}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for ExecutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {} (ID: {})",
            LocalDateTime(&self.executed_at),
            ExecutionSummary(self),
            self.id
        )?;
        if let Some(notes) = &self.notes {
            write!(f, " - {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CardioSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {}, {} min",
            LocalDateTime(&self.started_at),
            self.modality,
            self.duration_minutes
        )?;
        if let Some(distance) = self.distance_km {
            write!(f, ", {distance} km")?;
        }
        if let Some(notes) = &self.notes {
            write!(f, " - {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DailyLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Daily log for {}", self.date)?;
        writeln!(f)?;
        writeln!(f, "- Water: {} L", self.water_liters)?;
        writeln!(f, "- Food: {}", self.food_intake)?;
        if let Some(note) = &self.note {
            writeln!(f, "- Note: {note}")?;
        }
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))
    }
}

impl fmt::Display for MuscleGroupProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| {} | {}/{} | {}% |",
            self.muscle_group, self.executed_sets, self.target_sets, self.percent
        )
    }
}

impl fmt::Display for CardioProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} of {} minutes ({}%)",
            self.total_minutes, self.target_minutes, self.percent
        )
    }
}

impl fmt::Display for WeeklyProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "# Weekly progress ({} to {})",
            self.week_start, self.week_end
        )?;
        writeln!(f)?;
        writeln!(f, "## Strength")?;
        writeln!(f)?;

        if self.groups.is_empty() {
            writeln!(f, "No strength work planned.")?;
        } else {
            writeln!(f, "| Muscle group | Sets | Progress |")?;
            writeln!(f, "|:-|:-:|-:|")?;
            for group in &self.groups {
                write!(f, "{group}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "## Cardio")?;
        writeln!(f)?;
        write!(f, "{}", self.cardio)
    }
}

impl fmt::Display for CardioWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Cardio ({} to {})", self.week_start, self.week_end)?;
        writeln!(f)?;
        writeln!(f, "Total: {} minutes", self.total_minutes)?;
        writeln!(f)?;

        if self.sessions.is_empty() {
            writeln!(f, "No cardio sessions this week.")
        } else {
            for session in &self.sessions {
                write!(f, "{session}")?;
            }
            Ok(())
        }
    }
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seeded {} exercises, {} plan entries, {} executions, {} cardio sessions and {} daily log",
            self.exercises, self.plan_entries, self.executions, self.cardio_sessions, self.daily_logs
        )
    }
}
