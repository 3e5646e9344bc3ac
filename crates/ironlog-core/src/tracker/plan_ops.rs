//! Weekly plan operations for the Tracker.

use jiff::Zoned;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{DayPlan, Exercise, PlanEntry, WeekDay, WorkoutKind},
    params::AddPlanEntry,
};

/// Picks the exercise a new plan entry refers to: the explicit id when
/// given, otherwise the user's exercise with that name, otherwise a new one
/// whose execution type follows the workout kind.
fn resolve_exercise(
    db: &Database,
    user: &str,
    exercise_id: Option<u64>,
    name: &str,
    muscle_group: &str,
    kind: WorkoutKind,
) -> Result<Exercise> {
    if let Some(id) = exercise_id {
        return db
            .get_exercise(user, id)?
            .ok_or(TrackerError::ExerciseNotFound { id });
    }

    match db.find_exercise_by_name(user, name)? {
        Some(exercise) => Ok(exercise),
        None => db.create_exercise(Some(user), name, muscle_group, kind.execution_type()),
    }
}

impl Tracker {
    /// Appends an exercise to the plan of one weekday, creating the day
    /// plan and the exercise when they do not exist yet.
    pub async fn add_plan_entry(&self, params: &AddPlanEntry) -> Result<PlanEntry> {
        let (week_day, targets) = params.validate()?;
        let plan_name = params.plan_name.as_ref().map(|n| n.trim().to_string());
        let exercise_id = params.exercise_id;
        let exercise_name = params.exercise_name.trim().to_string();
        let muscle_group = params.muscle_group.trim().to_string();
        let kind = params.kind;

        self.with_database(move |db, user| {
            let exercise =
                resolve_exercise(db, user, exercise_id, &exercise_name, &muscle_group, kind)?;
            db.add_plan_entry(
                user,
                week_day,
                plan_name.as_deref(),
                exercise.id,
                kind,
                &targets,
            )
        })
        .await
    }

    /// Every day plan of the user, ordered by weekday, entries by position.
    pub async fn weekly_plan(&self) -> Result<Vec<DayPlan>> {
        self.with_database(|db, user| db.list_day_plans(user)).await
    }

    /// The plan for one weekday, if the user has one.
    pub async fn day_plan(&self, week_day: WeekDay) -> Result<Option<DayPlan>> {
        self.with_database(move |db, user| db.get_day_plan(user, week_day))
            .await
    }

    /// The plan for the current weekday in the system time zone.
    pub async fn today_plan(&self) -> Result<Option<DayPlan>> {
        self.day_plan(WeekDay::from(Zoned::now().weekday())).await
    }
}
