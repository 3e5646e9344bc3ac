use ironlog_core::{
    progress::WeekWindow, ExecutionType, FoodIntake, LogCardio, LogExecution, PlanTargets,
    TrackerError, WeekDay, WorkoutKind,
};
use jiff::{
    civil::date,
    tz::{self, TimeZone},
    Timestamp, ToSpan,
};

mod common;
use common::create_test_db;

/// Week of Wednesday 2024-05-08 in UTC-3: Monday 6th through Sunday 12th.
fn test_window() -> WeekWindow {
    let reference = date(2024, 5, 8)
        .at(12, 0, 0, 0)
        .to_zoned(TimeZone::fixed(tz::offset(-3)))
        .expect("Failed to build reference instant");
    WeekWindow::containing(&reference).expect("Failed to build week window")
}

fn set_of(exercise_id: u64) -> LogExecution {
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

fn cardio(minutes: u32) -> LogCardio {
    LogCardio {
        modality: "Bike".to_string(),
        duration_minutes: minutes,
        distance_km: Some(12.5),
        notes: None,
    }
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db(&[]);

    assert!(temp_file.path().exists());
    assert!(db.ensure_user("ana").expect("Failed to register user"));
    assert!(!db.ensure_user("ana").expect("Failed to register user"));
}

#[test]
fn test_create_and_get_exercise() {
    let (_temp_file, db) = create_test_db(&["ana"]);

    let exercise = db
        .create_exercise(Some("ana"), "Supino reto", "Peito", ExecutionType::Load)
        .expect("Failed to create exercise");

    assert!(exercise.id > 0);
    assert_eq!(exercise.owner.as_deref(), Some("ana"));
    assert!(!exercise.is_global());

    let loaded = db
        .get_exercise("ana", exercise.id)
        .expect("Failed to get exercise")
        .expect("Exercise should exist");
    assert_eq!(loaded, exercise);

    let by_name = db
        .find_exercise_by_name("ana", "Supino reto")
        .expect("Failed to find exercise");
    assert_eq!(by_name.map(|e| e.id), Some(exercise.id));
}

#[test]
fn test_global_exercises_are_visible_but_not_owned() {
    let (_temp_file, db) = create_test_db(&["ana", "bia"]);

    let global = db
        .create_exercise(None, "Prancha", "Core", ExecutionType::Timed)
        .expect("Failed to create global exercise");
    db.create_exercise(Some("bia"), "Agachamento", "Pernas", ExecutionType::Load)
        .expect("Failed to create exercise");

    assert!(global.is_global());
    let visible = db.list_exercises("ana").expect("Failed to list exercises");
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, global.id);

    assert!(db.get_exercise("ana", global.id).unwrap().is_some());
    assert_eq!(db.count_own_exercises("ana").unwrap(), 0);
    assert_eq!(db.count_own_exercises("bia").unwrap(), 1);
    // name lookup only matches the user's own exercises
    assert!(db.find_exercise_by_name("ana", "Prancha").unwrap().is_none());

    let record = db
        .insert_execution(
            "ana",
            &LogExecution {
                execution_type: ExecutionType::Timed,
                reps: None,
                weight: None,
                duration_sec: Some(60),
                ..set_of(global.id)
            },
            Timestamp::now(),
        )
        .expect("Global exercises can be logged");
    assert_eq!(record.exercise_id, global.id);
}

#[test]
fn test_add_plan_entry_positions_and_day_plan() {
    let (_temp_file, mut db) = create_test_db(&["ana"]);

    let bench = db
        .create_exercise(Some("ana"), "Supino reto", "Peito", ExecutionType::Load)
        .unwrap();
    let plank = db
        .create_exercise(Some("ana"), "Prancha", "Core", ExecutionType::Timed)
        .unwrap();

    let first = db
        .add_plan_entry(
            "ana",
            WeekDay::MONDAY,
            None,
            bench.id,
            WorkoutKind::Strength,
            &PlanTargets::Reps {
                sets: 4,
                reps: 10,
                weight: Some(40.0),
                rest_seconds: 90,
            },
        )
        .expect("Failed to add plan entry");
    let second = db
        .add_plan_entry(
            "ana",
            WeekDay::MONDAY,
            Some("Peito/Core"),
            plank.id,
            WorkoutKind::Timed,
            &PlanTargets::Timed {
                sets: 4,
                duration_sec: 60,
                rest_seconds: 90,
            },
        )
        .expect("Failed to add plan entry");

    assert_eq!((first.position, second.position), (0, 1));
    assert_eq!(second.exercise, plank);

    let plan = db
        .get_day_plan("ana", WeekDay::MONDAY)
        .unwrap()
        .expect("Day plan should exist");
    assert_eq!(plan.name, "Peito/Core");
    assert_eq!(plan.entries, vec![first.clone(), second]);

    assert_eq!(db.get_plan_entry("ana", first.id).unwrap(), Some(first));
    assert!(db.get_day_plan("ana", WeekDay::FRIDAY).unwrap().is_none());
}

#[test]
fn test_plan_entries_are_scoped_to_user() {
    let (_temp_file, mut db) = create_test_db(&["ana", "bia"]);

    let bench = db
        .create_exercise(Some("ana"), "Supino reto", "Peito", ExecutionType::Load)
        .unwrap();
    let entry = db
        .add_plan_entry(
            "ana",
            WeekDay::MONDAY,
            None,
            bench.id,
            WorkoutKind::Strength,
            &PlanTargets::Reps {
                sets: 3,
                reps: 8,
                weight: None,
                rest_seconds: 60,
            },
        )
        .unwrap();

    assert!(db.get_plan_entry("bia", entry.id).unwrap().is_none());
    assert!(db.list_plan_entries("bia").unwrap().is_empty());
    assert!(db.list_day_plans("bia").unwrap().is_empty());

    let squat = db
        .create_exercise(Some("bia"), "Agachamento", "Pernas", ExecutionType::Load)
        .unwrap();
    let err = db
        .insert_execution(
            "bia",
            &LogExecution {
                plan_entry_id: Some(entry.id),
                ..set_of(squat.id)
            },
            Timestamp::now(),
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::PlanEntryNotFound { id } if id == entry.id));
}

#[test]
fn test_executions_between_includes_both_bounds() {
    let (_temp_file, db) = create_test_db(&["ana"]);
    let window = test_window();
    let bench = db
        .create_exercise(Some("ana"), "Supino reto", "Peito", ExecutionType::Load)
        .unwrap();

    let start = window.start_timestamp();
    let end = window.end_timestamp();
    let instants = [
        start.checked_sub(1.millisecond()).unwrap(),
        start,
        start.checked_add(72.hours()).unwrap(),
        end,
        end.checked_add(1.millisecond()).unwrap(),
    ];
    for instant in instants {
        db.insert_execution("ana", &set_of(bench.id), instant)
            .expect("Failed to insert execution");
    }

    let inside = db
        .executions_between("ana", start, end)
        .expect("Failed to query executions");
    let times: Vec<_> = inside.iter().map(|r| r.executed_at).collect();
    assert_eq!(times, instants[1..4].to_vec());
    assert!(times
        .iter()
        .all(|&t| window.start_timestamp() <= t && t <= window.end_timestamp()));
}

#[test]
fn test_week_window_follows_time_zone() {
    let window = test_window();

    assert_eq!(window.first_day(), date(2024, 5, 6));
    assert_eq!(window.last_day(), date(2024, 5, 12));
    // Monday 00:00 at UTC-3 is 03:00 UTC
    assert_eq!(
        window.start_timestamp(),
        "2024-05-06T03:00:00Z".parse::<Timestamp>().unwrap()
    );
    assert_eq!(
        window.end_timestamp(),
        "2024-05-13T02:59:59.999Z".parse::<Timestamp>().unwrap()
    );
}

#[test]
fn test_execution_history_orders_and_limits() {
    let (_temp_file, db) = create_test_db(&["ana"]);
    let bench = db
        .create_exercise(Some("ana"), "Supino reto", "Peito", ExecutionType::Load)
        .unwrap();
    let squat = db
        .create_exercise(Some("ana"), "Agachamento", "Pernas", ExecutionType::Load)
        .unwrap();

    let base = test_window().start_timestamp();
    for hour in 0..5_i64 {
        let at = base.checked_add(hour.hours()).unwrap();
        db.insert_execution("ana", &set_of(bench.id), at).unwrap();
        db.insert_execution("ana", &set_of(squat.id), at).unwrap();
    }

    let history = db.execution_history("ana", bench.id, 3).unwrap();
    assert_eq!(history.len(), 3);
    assert!(history.iter().all(|r| r.exercise_id == bench.id));
    assert!(history
        .windows(2)
        .all(|pair| pair[0].executed_at > pair[1].executed_at));
    assert_eq!(history[0].executed_at, base.checked_add(4.hours()).unwrap());
}

#[test]
fn test_insert_execution_requires_visible_exercise() {
    let (_temp_file, db) = create_test_db(&["ana", "bia"]);
    let bench = db
        .create_exercise(Some("bia"), "Supino reto", "Peito", ExecutionType::Load)
        .unwrap();

    let err = db
        .insert_execution("ana", &set_of(bench.id), Timestamp::now())
        .unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { id } if id == bench.id));

    let err = db
        .insert_execution("ana", &set_of(9999), Timestamp::now())
        .unwrap_err();
    assert!(matches!(err, TrackerError::ExerciseNotFound { id: 9999 }));
}

#[test]
fn test_cardio_between_respects_window_and_user() {
    let (_temp_file, db) = create_test_db(&["ana", "bia"]);
    let window = test_window();
    let start = window.start_timestamp();

    db.insert_cardio("ana", &cardio(30), start).unwrap();
    db.insert_cardio("ana", &cardio(45), window.end_timestamp())
        .unwrap();
    db.insert_cardio("ana", &cardio(60), start.checked_sub(1.hour()).unwrap())
        .unwrap();
    db.insert_cardio("bia", &cardio(90), start).unwrap();

    let sessions = db
        .cardio_between("ana", start, window.end_timestamp())
        .unwrap();
    let minutes: Vec<_> = sessions.iter().map(|s| s.duration_minutes).collect();
    assert_eq!(minutes, [30, 45]);
    assert_eq!(sessions[0].modality, "Bike");
    assert_eq!(sessions[0].distance_km, Some(12.5));
}

#[test]
fn test_upsert_daily_log_keeps_note_when_absent() {
    let (_temp_file, db) = create_test_db(&["ana"]);
    let day = date(2024, 5, 8);

    let first = db
        .upsert_daily_log("ana", day, 2.0, FoodIntake::WithinDiet, Some("Treino bom"))
        .expect("Failed to save daily log");
    let second = db
        .upsert_daily_log("ana", day, 3.0, FoodIntake::SlightlyOver, None)
        .expect("Failed to update daily log");

    assert_eq!(first.id, second.id);
    assert_eq!(second.water_liters, 3.0);
    assert_eq!(second.food_intake, FoodIntake::SlightlyOver);
    assert_eq!(second.note.as_deref(), Some("Treino bom"));
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);

    let third = db
        .upsert_daily_log("ana", day, 3.0, FoodIntake::SlightlyOver, Some("Outra nota"))
        .unwrap();
    assert_eq!(third.note.as_deref(), Some("Outra nota"));

    assert_eq!(db.get_daily_log("ana", day).unwrap(), Some(third));
    assert!(db.get_daily_log("ana", date(2024, 5, 9)).unwrap().is_none());
}
