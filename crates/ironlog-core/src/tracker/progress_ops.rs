//! Weekly progress for the Tracker.

use super::Tracker;
use crate::{
    error::Result,
    models::{PlanEntry, WeeklyProgress},
    params::WeekOf,
    progress::{cardio_progress, muscle_group_progress, PlannedSets, WeekWindow},
};

/// Weekly cardio target of a plan: the largest weekly minutes among its
/// cardio entries, or `None` when it has no cardio entries.
///
/// Each cardio entry states the goal for the whole week, so the same goal
/// repeated on several days is not added up.
fn planned_cardio_minutes(entries: &[PlanEntry]) -> Option<u32> {
    entries
        .iter()
        .filter_map(|entry| entry.targets.weekly_minutes())
        .max()
}

impl Tracker {
    /// Planned versus executed work for the requested week (the current
    /// week by default).
    pub async fn weekly_progress(&self, params: &WeekOf) -> Result<WeeklyProgress> {
        let window = params.window()?;
        self.progress_in_window(&window).await
    }

    /// Planned versus executed work inside an explicit week window.
    ///
    /// The plan is read as it stands now; executions and cardio sessions are
    /// restricted to the window.
    pub async fn progress_in_window(&self, window: &WeekWindow) -> Result<WeeklyProgress> {
        let (start, end) = (window.start_timestamp(), window.end_timestamp());
        let (entries, executions, sessions) = self
            .with_database(move |db, user| {
                Ok((
                    db.list_plan_entries(user)?,
                    db.executions_between(user, start, end)?,
                    db.cardio_between(user, start, end)?,
                ))
            })
            .await?;

        let planned: Vec<PlannedSets> = entries.iter().map(PlannedSets::from).collect();
        let cardio_target =
            planned_cardio_minutes(&entries).unwrap_or(self.weekly_cardio_minutes);

        log::debug!(
            "Weekly progress {}..{}: {} plan entries, {} executions, {} cardio sessions",
            window.first_day(),
            window.last_day(),
            entries.len(),
            executions.len(),
            sessions.len()
        );

        Ok(WeeklyProgress {
            week_start: window.first_day(),
            week_end: window.last_day(),
            groups: muscle_group_progress(&planned, &executions),
            cardio: cardio_progress(&sessions, cardio_target),
        })
    }
}
