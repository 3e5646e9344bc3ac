//! Tests for the tracker module.

use tempfile::TempDir;

use super::*;
use crate::{
    error::TrackerError,
    models::{ExecutionType, FoodIntake, PlanTargets, WeekDay, WorkoutKind},
    params::{
        AddPlanEntry, CreateExercise, DayOf, ExecutionHistory, LogCardio, LogExecution, PlanDay,
        SaveDailyLog, WeekOf,
    },
};

/// Helper function to create a test tracker for `user`
async fn create_test_tracker(temp_dir: &TempDir, user: &str) -> Tracker {
    TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_user(user)
        .build()
        .await
        .expect("Failed to create tracker")
}

fn strength_entry(week_day: u8, name: &str, group: &str, sets: u32) -> AddPlanEntry {
    AddPlanEntry {
        week_day,
        plan_name: None,
        exercise_id: None,
        exercise_name: name.to_string(),
        muscle_group: group.to_string(),
        kind: WorkoutKind::Strength,
        sets: Some(sets),
        reps: Some(10),
        weight: Some(40.0),
        duration_sec: None,
        rest_seconds: Some(90),
        weekly_minutes: None,
    }
}

fn cardio_entry(week_day: u8, weekly_minutes: u32) -> AddPlanEntry {
    AddPlanEntry {
        week_day,
        plan_name: None,
        exercise_id: None,
        exercise_name: "Corrida".to_string(),
        muscle_group: "Cardio".to_string(),
        kind: WorkoutKind::Cardio,
        sets: None,
        reps: None,
        weight: None,
        duration_sec: None,
        rest_seconds: None,
        weekly_minutes: Some(weekly_minutes),
    }
}

fn load_set(exercise_id: u64) -> LogExecution {
    LogExecution {
        exercise_id,
        plan_entry_id: None,
        execution_type: ExecutionType::Load,
        reps: Some(10),
        weight: Some(40.0),
        duration_sec: None,
        notes: None,
    }
}

fn run(minutes: u32) -> LogCardio {
    LogCardio {
        modality: "Run".to_string(),
        duration_minutes: minutes,
        distance_km: None,
        notes: None,
    }
}

#[tokio::test]
async fn test_create_and_list_exercises() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    for name in ["Remada curvada", "Agachamento"] {
        tracker
            .create_exercise(&CreateExercise {
                name: format!("  {name} "),
                muscle_group: "Costas".to_string(),
                execution_type: ExecutionType::Load,
            })
            .await
            .expect("Failed to create exercise");
    }

    let exercises = tracker.list_exercises().await.unwrap();
    let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Agachamento", "Remada curvada"]);
    assert!(exercises.iter().all(|e| e.owner.as_deref() == Some("ana")));
}

#[tokio::test]
async fn test_create_exercise_rejects_short_name() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let err = tracker
        .create_exercise(&CreateExercise {
            name: "A".to_string(),
            muscle_group: "Core".to_string(),
            execution_type: ExecutionType::Timed,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TrackerError::InvalidInput { ref field, .. } if field == "name"));
    assert!(tracker.list_exercises().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_plan_entry_builds_day_plan_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let first = tracker
        .add_plan_entry(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    let second = tracker
        .add_plan_entry(&strength_entry(1, "Crucifixo", "Peito", 3))
        .await
        .unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(first.day_plan_id, second.day_plan_id);
    assert_eq!(first.exercise.execution_type, ExecutionType::Load);

    let plan = tracker.day_plan(WeekDay::MONDAY).await.unwrap().unwrap();
    assert_eq!(plan.name, "Weekly plan");
    let names: Vec<_> = plan.entries.iter().map(|e| e.exercise.name.as_str()).collect();
    assert_eq!(names, ["Supino reto", "Crucifixo"]);
}

#[tokio::test]
async fn test_add_plan_entry_reuses_exercise_and_renames_plan() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let monday = tracker
        .add_plan_entry(&strength_entry(1, "Agachamento", "Pernas", 4))
        .await
        .unwrap();

    let mut friday = strength_entry(5, "Agachamento", "Pernas", 5);
    friday.plan_name = Some("Pernas".to_string());
    let friday = tracker.add_plan_entry(&friday).await.unwrap();

    assert_eq!(monday.exercise.id, friday.exercise.id);
    assert_eq!(tracker.list_exercises().await.unwrap().len(), 1);

    let mut renamed = cardio_entry(1, 60);
    renamed.plan_name = Some("Pernas e cardio".to_string());
    tracker.add_plan_entry(&renamed).await.unwrap();

    let week = tracker.weekly_plan().await.unwrap();
    let days: Vec<_> = week.iter().map(|p| (p.week_day, p.name.as_str())).collect();
    assert_eq!(
        days,
        [
            (WeekDay::MONDAY, "Pernas e cardio"),
            (WeekDay::FRIDAY, "Pernas")
        ]
    );
    assert_eq!(
        week[0].entries[1].targets,
        PlanTargets::Cardio { weekly_minutes: 60 }
    );
    assert_eq!(week[0].entries[1].exercise.execution_type, ExecutionType::Cardio);
}

#[tokio::test]
async fn test_add_plan_entry_with_unknown_exercise_id() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let mut params = strength_entry(2, "Supino reto", "Peito", 4);
    params.exercise_id = Some(999);

    let err = tracker.add_plan_entry(&params).await.unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { id: 999 }));
    assert!(tracker.weekly_plan().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_weekly_progress_counts_sets_per_group() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let bench = tracker
        .add_plan_entry(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    tracker
        .add_plan_entry(&strength_entry(3, "Flexão", "Peito", 4))
        .await
        .unwrap();
    let squat = tracker
        .add_plan_entry(&strength_entry(3, "Agachamento", "Pernas", 4))
        .await
        .unwrap();

    for _ in 0..3 {
        tracker.log_execution(&load_set(bench.exercise.id)).await.unwrap();
    }
    for _ in 0..6 {
        tracker.log_execution(&load_set(squat.exercise.id)).await.unwrap();
    }

    let progress = tracker.weekly_progress(&WeekOf::default()).await.unwrap();

    assert_eq!(progress.groups.len(), 2);
    let chest = &progress.groups[0];
    assert_eq!(chest.muscle_group, "Peito");
    assert_eq!((chest.executed_sets, chest.target_sets), (3, 8));
    assert_eq!(chest.percent, 38);
    let legs = &progress.groups[1];
    assert_eq!((legs.executed_sets, legs.target_sets), (6, 4));
    assert_eq!(legs.percent, 100);
}

#[tokio::test]
async fn test_weekly_progress_cardio_target_falls_back_to_configured() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_weekly_cardio_minutes(120)
        .build()
        .await
        .unwrap();

    tracker.log_cardio(&run(30)).await.unwrap();
    tracker.log_cardio(&run(30)).await.unwrap();

    let progress = tracker.weekly_progress(&WeekOf::default()).await.unwrap();
    assert_eq!(progress.cardio.total_minutes, 60);
    assert_eq!(progress.cardio.target_minutes, 120);
    assert_eq!(progress.cardio.percent, 50);
}

#[tokio::test]
async fn test_weekly_progress_cardio_target_from_plan() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    tracker.add_plan_entry(&cardio_entry(1, 90)).await.unwrap();
    tracker.add_plan_entry(&cardio_entry(3, 90)).await.unwrap();
    tracker.add_plan_entry(&cardio_entry(5, 40)).await.unwrap();
    tracker.log_cardio(&run(45)).await.unwrap();

    let progress = tracker.weekly_progress(&WeekOf::default()).await.unwrap();
    // the weekly goal repeated on several days is not added up
    assert_eq!(progress.cardio.target_minutes, 90);
    assert_eq!(progress.cardio.percent, 50);
    // cardio entries have no sets but still form a group
    assert_eq!(progress.groups[0].muscle_group, "Cardio");
    assert_eq!(progress.groups[0].target_sets, 0);
    assert_eq!(progress.groups[0].percent, 0);
}

#[tokio::test]
async fn test_past_week_excludes_current_logs() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let bench = tracker
        .add_plan_entry(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    tracker.log_execution(&load_set(bench.exercise.id)).await.unwrap();
    tracker.log_cardio(&run(30)).await.unwrap();

    let progress = tracker
        .weekly_progress(&WeekOf {
            date: Some("2020-01-08".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(progress.week_start, jiff::civil::date(2020, 1, 6));
    assert_eq!(progress.groups[0].executed_sets, 0);
    assert_eq!(progress.cardio.total_minutes, 0);

    let cardio = tracker
        .weekly_cardio(&WeekOf {
            date: Some("2020-01-08".to_string()),
        })
        .await
        .unwrap();
    assert!(cardio.sessions.is_empty());
}

#[tokio::test]
async fn test_users_do_not_see_each_other() {
    let temp_dir = TempDir::new().unwrap();
    let ana = create_test_tracker(&temp_dir, "ana").await;
    let bia = create_test_tracker(&temp_dir, "bia").await;

    let entry = ana
        .add_plan_entry(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    ana.log_cardio(&run(50)).await.unwrap();

    assert!(bia.list_exercises().await.unwrap().is_empty());
    assert!(bia.weekly_plan().await.unwrap().is_empty());
    assert_eq!(bia.weekly_cardio(&WeekOf::default()).await.unwrap().total_minutes, 0);

    let err = bia.log_execution(&load_set(entry.exercise.id)).await.unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { .. }));

    let mut own_exercise_foreign_entry = load_set(
        bia.create_exercise(&CreateExercise {
            name: "Supino reto".to_string(),
            muscle_group: "Peito".to_string(),
            execution_type: ExecutionType::Load,
        })
        .await
        .unwrap()
        .id,
    );
    own_exercise_foreign_entry.plan_entry_id = Some(entry.id);
    let err = bia.log_execution(&own_exercise_foreign_entry).await.unwrap_err();
    assert!(matches!(err, TrackerError::PlanEntryNotFound { id } if id == entry.id));
}

#[tokio::test]
async fn test_execution_history_is_newest_first_and_limited() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let entry = tracker
        .add_plan_entry(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    for reps in 1..=4 {
        let mut set = load_set(entry.exercise.id);
        set.reps = Some(reps);
        tracker.log_execution(&set).await.unwrap();
    }

    let history = tracker
        .execution_history(&ExecutionHistory {
            exercise_id: entry.exercise.id,
            limit: Some(3),
        })
        .await
        .unwrap();
    let reps: Vec<_> = history.iter().map(|r| r.reps).collect();
    assert_eq!(reps, [Some(4), Some(3), Some(2)]);

    let err = tracker
        .execution_history(&ExecutionHistory {
            exercise_id: 404,
            limit: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { id: 404 }));
}

#[tokio::test]
async fn test_save_daily_log_upserts_and_keeps_note() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let first = tracker
        .save_daily_log(&SaveDailyLog {
            date: Some("2024-05-06".to_string()),
            water_liters: 1.5,
            food_intake: FoodIntake::WithinDiet,
            note: Some("Dia ok".to_string()),
        })
        .await
        .unwrap();

    let second = tracker
        .save_daily_log(&SaveDailyLog {
            date: Some("2024-05-06".to_string()),
            water_liters: 2.5,
            food_intake: FoodIntake::Over,
            note: None,
        })
        .await
        .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.water_liters, 2.5);
    assert_eq!(second.food_intake, FoodIntake::Over);
    assert_eq!(second.note.as_deref(), Some("Dia ok"));

    let loaded = tracker
        .daily_log(&DayOf {
            date: Some("2024-05-06".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(loaded, Some(second));

    let missing = tracker
        .daily_log(&DayOf {
            date: Some("2024-05-07".to_string()),
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_seed_demo_data_runs_once() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "demo").await;

    let summary = tracker.seed_demo_data().await.unwrap().unwrap();
    assert_eq!(summary.exercises, 6);
    assert_eq!(summary.plan_entries, 7);
    assert_eq!(summary.executions, 4);
    assert_eq!(summary.cardio_sessions, 2);

    let week = tracker.weekly_plan().await.unwrap();
    let days: Vec<_> = week.iter().map(|p| p.week_day).collect();
    assert_eq!(days, [WeekDay::MONDAY, WeekDay::WEDNESDAY, WeekDay::FRIDAY]);
    assert_eq!(week[0].name, "Peito/Core");

    assert!(tracker.seed_demo_data().await.unwrap().is_none());
    assert_eq!(tracker.list_exercises().await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_handlers_render_markdown() {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_test_tracker(&temp_dir, "ana").await;

    let created = tracker
        .add_plan_entry_result(&strength_entry(1, "Supino reto", "Peito", 4))
        .await
        .unwrap();
    assert!(created.to_string().starts_with("Added plan entry with ID: 1 to Monday"));

    let monday = tracker
        .day_plan_view(&PlanDay { week_day: Some(1) })
        .await
        .unwrap();
    assert!(monday.contains("**Supino reto**"));

    let sunday = tracker
        .day_plan_view(&PlanDay { week_day: Some(0) })
        .await
        .unwrap();
    assert!(sunday.starts_with("Error: No plan for this day"));

    let err = tracker
        .day_plan_view(&PlanDay { week_day: Some(9) })
        .await
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_builder_rejects_blank_user() {
    let temp_dir = TempDir::new().unwrap();
    let result = TrackerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_user("   ")
        .build()
        .await;

    assert!(matches!(
        result,
        Err(TrackerError::InvalidInput { ref field, .. }) if field == "user"
    ));
}
