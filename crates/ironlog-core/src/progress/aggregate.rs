//! Planned-versus-executed reductions for one week.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{
    CardioProgress, CardioSession, ExecutionRecord, MuscleGroupProgress, PlanEntry,
};

/// Weekly cardio target used when nothing else is configured.
pub const DEFAULT_WEEKLY_CARDIO_MINUTES: u32 = 90;

/// The slice of a plan entry the muscle-group aggregation needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedSets {
    pub exercise_id: u64,
    pub muscle_group: String,
    /// `None` for entries without a set count (cardio)
    pub target_sets: Option<u32>,
}

impl From<&PlanEntry> for PlannedSets {
    fn from(entry: &PlanEntry) -> Self {
        Self {
            exercise_id: entry.exercise.id,
            muscle_group: entry.exercise.muscle_group.clone(),
            target_sets: entry.targets.sets(),
        }
    }
}

/// Groups planned and executed sets by muscle group.
///
/// Each execution record counts as one completed set. Executions of
/// exercises missing from `plan` are ignored. Groups come out in the order
/// they are first seen in `plan`.
///
/// # Examples
///
/// ```rust
/// use ironlog_core::progress::{muscle_group_progress, PlannedSets};
///
/// let plan = vec![PlannedSets {
///     exercise_id: 1,
///     muscle_group: "Peito".to_string(),
///     target_sets: Some(8),
/// }];
/// let groups = muscle_group_progress(&plan, &[]);
/// assert_eq!(groups[0].target_sets, 8);
/// assert_eq!(groups[0].percent, 0);
/// ```
pub fn muscle_group_progress(
    plan: &[PlannedSets],
    executions: &[ExecutionRecord],
) -> Vec<MuscleGroupProgress> {
    let mut order: Vec<(&str, u32, u32)> = Vec::new();
    let mut index_by_group: HashMap<&str, usize> = HashMap::new();
    let mut group_by_exercise: HashMap<u64, &str> = HashMap::new();

    for planned in plan {
        let group = planned.muscle_group.as_str();
        let index = *index_by_group.entry(group).or_insert_with(|| {
            order.push((group, 0, 0));
            order.len() - 1
        });
        order[index].1 = order[index].1.saturating_add(planned.target_sets.unwrap_or(0));
        // first plan entry for an exercise decides its group
        group_by_exercise.entry(planned.exercise_id).or_insert(group);
    }

    for execution in executions {
        let Some(group) = group_by_exercise.get(&execution.exercise_id) else {
            continue;
        };
        if let Some(&index) = index_by_group.get(group) {
            order[index].2 = order[index].2.saturating_add(1);
        }
    }

    order
        .into_iter()
        .map(|(group, target, executed)| MuscleGroupProgress {
            muscle_group: group.to_string(),
            target_sets: target,
            executed_sets: executed,
            percent: completion_percent(u64::from(executed), u64::from(target)),
        })
        .collect()
}

/// Sums this week's cardio minutes against `weekly_target_minutes`.
///
/// A zero target yields 0 percent. The total saturates at `u32::MAX`.
pub fn cardio_progress(sessions: &[CardioSession], weekly_target_minutes: u32) -> CardioProgress {
    let total = total_minutes(sessions);
    CardioProgress {
        total_minutes: total,
        target_minutes: weekly_target_minutes,
        percent: completion_percent(u64::from(total), u64::from(weekly_target_minutes)),
    }
}

/// Sum of session durations, saturating at `u32::MAX`.
pub fn total_minutes(sessions: &[CardioSession]) -> u32 {
    sessions
        .iter()
        .fold(0u32, |total, s| total.saturating_add(s.duration_minutes))
}

/// `round(100 * done / target)` clamped to 100, halves rounding up; 0 when
/// `target` is 0.
fn completion_percent(done: u64, target: u64) -> u8 {
    if target == 0 {
        return 0;
    }
    let rounded = (200 * done + target) / (2 * target);
    // clamped to 100, so always fits
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::ExecutionType;

    fn planned(exercise_id: u64, group: &str, sets: Option<u32>) -> PlannedSets {
        PlannedSets {
            exercise_id,
            muscle_group: group.to_string(),
            target_sets: sets,
        }
    }

    fn executed(exercise_id: u64) -> ExecutionRecord {
        ExecutionRecord {
            id: 0,
            exercise_id,
            plan_entry_id: None,
            execution_type: ExecutionType::Load,
            reps: Some(10),
            weight: Some(40.0),
            duration_sec: None,
            notes: None,
            executed_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn session(minutes: u32) -> CardioSession {
        CardioSession {
            id: 0,
            modality: "Run".to_string(),
            duration_minutes: minutes,
            distance_km: None,
            notes: None,
            started_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_three_of_eight_sets_rounds_to_38() {
        let plan = vec![planned(1, "Peito", Some(8))];
        let executions = vec![executed(1), executed(1), executed(1)];

        let groups = muscle_group_progress(&plan, &executions);

        assert_eq!(
            groups,
            vec![MuscleGroupProgress {
                muscle_group: "Peito".to_string(),
                target_sets: 8,
                executed_sets: 3,
                percent: 38,
            }]
        );
    }

    #[test]
    fn test_targets_sum_per_group_in_first_seen_order() {
        let plan = vec![
            planned(1, "Pernas", Some(4)),
            planned(2, "Peito", Some(4)),
            planned(3, "Pernas", Some(3)),
            planned(4, "Core", Some(2)),
        ];

        let groups = muscle_group_progress(&plan, &[]);
        let names: Vec<_> = groups.iter().map(|g| g.muscle_group.as_str()).collect();

        assert_eq!(names, ["Pernas", "Peito", "Core"]);
        assert_eq!(groups[0].target_sets, 7);
    }

    #[test]
    fn test_unplanned_executions_are_ignored() {
        let plan = vec![planned(1, "Peito", Some(4))];
        let executions = vec![executed(99), executed(1), executed(42)];

        let groups = muscle_group_progress(&plan, &executions);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].executed_sets, 1);
    }

    #[test]
    fn test_zero_target_group_reports_zero_percent() {
        let plan = vec![planned(7, "Cardio", None)];
        let executions = vec![executed(7), executed(7)];

        let groups = muscle_group_progress(&plan, &executions);

        assert_eq!(groups[0].target_sets, 0);
        assert_eq!(groups[0].executed_sets, 2);
        assert_eq!(groups[0].percent, 0);
    }

    #[test]
    fn test_percent_is_clamped_to_100() {
        let plan = vec![planned(1, "Costas", Some(2))];
        let executions: Vec<_> = (0..9).map(|_| executed(1)).collect();

        let groups = muscle_group_progress(&plan, &executions);

        assert_eq!(groups[0].executed_sets, 9);
        assert_eq!(groups[0].percent, 100);
    }

    #[test]
    fn test_group_keys_are_case_sensitive() {
        let plan = vec![planned(1, "peito", Some(2)), planned(2, "Peito", Some(2))];

        let groups = muscle_group_progress(&plan, &[executed(2)]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].executed_sets, 0);
        assert_eq!(groups[1].executed_sets, 1);
    }

    #[test]
    fn test_exercise_planned_twice_counts_execution_once() {
        let plan = vec![planned(1, "Peito", Some(4)), planned(1, "Peito", Some(4))];

        let groups = muscle_group_progress(&plan, &[executed(1)]);

        assert_eq!(groups[0].target_sets, 8);
        assert_eq!(groups[0].executed_sets, 1);
        assert_eq!(groups[0].percent, 13);
    }

    #[test]
    fn test_percent_bounds_hold_over_many_shapes() {
        for target in 0..12u32 {
            for done in 0..30u64 {
                let plan = vec![planned(1, "G", Some(target))];
                let executions: Vec<_> = (0..done).map(|_| executed(1)).collect();
                let groups = muscle_group_progress(&plan, &executions);
                assert!(groups[0].percent <= 100);
                if target == 0 {
                    assert_eq!(groups[0].percent, 0);
                }
            }
        }
    }

    #[test]
    fn test_cardio_half_and_clamped() {
        let half = cardio_progress(&[session(20), session(25)], 90);
        assert_eq!(half.total_minutes, 45);
        assert_eq!(half.target_minutes, 90);
        assert_eq!(half.percent, 50);

        let over = cardio_progress(&[session(200)], DEFAULT_WEEKLY_CARDIO_MINUTES);
        assert_eq!(over.total_minutes, 200);
        assert_eq!(over.percent, 100);
    }

    #[test]
    fn test_cardio_zero_target_and_no_sessions() {
        assert_eq!(cardio_progress(&[session(30)], 0).percent, 0);
        let empty = cardio_progress(&[], 90);
        assert_eq!(empty.total_minutes, 0);
        assert_eq!(empty.percent, 0);
    }

    #[test]
    fn test_huge_targets_saturate_instead_of_wrapping() {
        let plan = vec![
            planned(1, "Peito", Some(u32::MAX)),
            planned(2, "Peito", Some(1)),
        ];

        let groups = muscle_group_progress(&plan, &[executed(1)]);

        assert_eq!(groups[0].target_sets, u32::MAX);
        assert_eq!(groups[0].executed_sets, 1);
        assert_eq!(groups[0].percent, 0);
    }

    #[test]
    fn test_huge_cardio_total_saturates() {
        let progress = cardio_progress(&[session(u32::MAX), session(1)], 90);

        assert_eq!(progress.total_minutes, u32::MAX);
        assert_eq!(progress.percent, 100);
        assert_eq!(total_minutes(&[session(u32::MAX), session(u32::MAX)]), u32::MAX);
    }

    #[test]
    fn test_completion_rounds_halves_up() {
        assert_eq!(completion_percent(1, 8), 13); // 12.5
        assert_eq!(completion_percent(1, 200), 1); // 0.5
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
    }
}
