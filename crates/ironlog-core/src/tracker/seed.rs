//! Demo data for a fresh user: a small exercise catalog, a
//! Monday/Wednesday/Friday plan and a few logs so every view has content.

use jiff::{Timestamp, ToSpan, Zoned};
use serde::{Deserialize, Serialize};

use super::Tracker;
use crate::{
    db::Database,
    error::Result,
    models::{ExecutionType, FoodIntake, PlanTargets, WeekDay, WorkoutKind},
    params::{LogCardio, LogExecution},
};

/// Counts of the records created by [`Tracker::seed_demo_data`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedSummary {
    pub exercises: u32,
    pub plan_entries: u32,
    pub executions: u32,
    pub cardio_sessions: u32,
    pub daily_logs: u32,
}

const CATALOG: [(&str, &str, ExecutionType); 6] = [
    ("Supino reto", "Peito", ExecutionType::Load),
    ("Agachamento", "Pernas", ExecutionType::Load),
    ("Remada curvada", "Costas", ExecutionType::Load),
    ("Prancha", "Core", ExecutionType::Timed),
    ("Flexão de braço", "Peito", ExecutionType::Bodyweight),
    ("Corrida", "Cardio", ExecutionType::Cardio),
];

const WEEK_PLAN: [(WeekDay, &str, &[&str]); 3] = [
    (
        WeekDay::MONDAY,
        "Peito/Core",
        &["Supino reto", "Flexão de braço", "Prancha"],
    ),
    (
        WeekDay::WEDNESDAY,
        "Pernas/Costas",
        &["Agachamento", "Remada curvada", "Prancha"],
    ),
    (WeekDay::FRIDAY, "Cardio leve", &["Corrida"]),
];

fn kind_for(execution_type: ExecutionType) -> WorkoutKind {
    match execution_type {
        ExecutionType::Load => WorkoutKind::Strength,
        ExecutionType::Bodyweight => WorkoutKind::Bodyweight,
        ExecutionType::Timed => WorkoutKind::Timed,
        ExecutionType::Cardio => WorkoutKind::Cardio,
    }
}

fn targets_for(name: &str, execution_type: ExecutionType) -> PlanTargets {
    match execution_type {
        ExecutionType::Timed => PlanTargets::Timed {
            sets: 4,
            duration_sec: 60,
            rest_seconds: 90,
        },
        ExecutionType::Cardio => PlanTargets::Cardio { weekly_minutes: 90 },
        ExecutionType::Load | ExecutionType::Bodyweight => PlanTargets::Reps {
            sets: 4,
            reps: 10,
            weight: match name {
                "Supino reto" => Some(40.0),
                "Agachamento" => Some(50.0),
                _ => None,
            },
            rest_seconds: 90,
        },
    }
}

fn execution(exercise_id: u64, execution_type: ExecutionType) -> LogExecution {
    LogExecution {
        exercise_id,
        plan_entry_id: None,
        execution_type,
        reps: None,
        weight: None,
        duration_sec: None,
        notes: None,
    }
}

fn seed(db: &mut Database, user: &str, now: &Zoned) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    let mut catalog = Vec::with_capacity(CATALOG.len());
    for (name, group, execution_type) in CATALOG {
        let exercise = db.create_exercise(Some(user), name, group, execution_type)?;
        catalog.push(exercise);
        summary.exercises += 1;
    }
    let find = |name: &str| catalog.iter().find(|e| e.name == name);

    for (week_day, plan_name, slots) in WEEK_PLAN {
        for &slot in slots {
            let Some(exercise) = find(slot) else {
                continue;
            };
            let targets = targets_for(&exercise.name, exercise.execution_type);
            db.add_plan_entry(
                user,
                week_day,
                Some(plan_name),
                exercise.id,
                kind_for(exercise.execution_type),
                &targets,
            )?;
            summary.plan_entries += 1;
        }
    }

    let mut executions = Vec::new();
    if let Some(bench) = find("Supino reto") {
        executions.push(LogExecution {
            reps: Some(10),
            weight: Some(40.0),
            ..execution(bench.id, ExecutionType::Load)
        });
    }
    if let Some(squat) = find("Agachamento") {
        executions.push(LogExecution {
            reps: Some(12),
            weight: Some(50.0),
            ..execution(squat.id, ExecutionType::Load)
        });
    }
    if let Some(plank) = find("Prancha") {
        executions.push(LogExecution {
            duration_sec: Some(60),
            ..execution(plank.id, ExecutionType::Timed)
        });
    }
    if let Some(run) = find("Corrida") {
        executions.push(LogExecution {
            duration_sec: Some(20 * 60),
            ..execution(run.id, ExecutionType::Cardio)
        });
    }

    // one hour apart, most recent first
    let mut executed_at: Timestamp = now.timestamp();
    for record in &executions {
        db.insert_execution(user, record, executed_at)?;
        executed_at = executed_at.checked_sub(1.hour())?;
        summary.executions += 1;
    }

    for (modality, duration_minutes, distance_km) in [("Corrida", 30, 5.0), ("Bike", 40, 12.0)] {
        let session = LogCardio {
            modality: modality.to_string(),
            duration_minutes,
            distance_km: Some(distance_km),
            notes: None,
        };
        db.insert_cardio(user, &session, now.timestamp())?;
        summary.cardio_sessions += 1;
    }

    db.upsert_daily_log(user, now.date(), 2.2, FoodIntake::WithinDiet, Some("Dia ok"))?;
    summary.daily_logs += 1;

    Ok(summary)
}

impl Tracker {
    /// Fills an empty account with demo data.
    ///
    /// Returns `None` without touching anything when the user already owns
    /// exercises.
    pub async fn seed_demo_data(&self) -> Result<Option<SeedSummary>> {
        self.with_database(|db, user| {
            if db.count_own_exercises(user)? > 0 {
                log::info!("User '{user}' already has exercises; skipping demo data");
                return Ok(None);
            }

            let now = Zoned::now();
            let summary = db.atomically(|db| seed(db, user, &now))?;
            log::info!(
                "Seeded demo data for '{user}': {} exercises, {} plan entries",
                summary.exercises,
                summary.plan_entries
            );
            Ok(Some(summary))
        })
        .await
    }
}
