//! Short one-line descriptions of execution records.

use std::fmt;

use crate::models::{ExecutionRecord, ExecutionType};

/// Describes what was done in one execution: `"10 reps @ 40kg"` for loaded
/// work, `"12 reps"` for bodyweight, `"60s"` for timed holds and cardio.
/// Missing numbers print as 0.
///
/// # Examples
///
/// ```rust
/// use ironlog_core::{display::format_execution, models::{ExecutionRecord, ExecutionType}};
/// use jiff::Timestamp;
///
/// let record = ExecutionRecord {
///     id: 1,
///     exercise_id: 3,
///     plan_entry_id: None,
///     execution_type: ExecutionType::Load,
///     reps: Some(10),
///     weight: Some(40.0),
///     duration_sec: None,
///     notes: None,
///     executed_at: Timestamp::now(),
/// };
/// assert_eq!(format_execution(&record), "10 reps @ 40kg");
/// ```
pub fn format_execution(record: &ExecutionRecord) -> String {
    ExecutionSummary(record).to_string()
}

/// Display wrapper behind [`format_execution`].
pub struct ExecutionSummary<'a>(pub &'a ExecutionRecord);

impl fmt::Display for ExecutionSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        match record.execution_type {
            ExecutionType::Load => write!(
                f,
                "{} reps @ {}kg",
                record.reps.unwrap_or(0),
                record.weight.unwrap_or(0.0)
            ),
            ExecutionType::Bodyweight => write!(f, "{} reps", record.reps.unwrap_or(0)),
            ExecutionType::Timed | ExecutionType::Cardio => {
                write!(f, "{}s", record.duration_sec.unwrap_or(0))
            }
        }
    }
}
