//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::{CardioSession, DailyLog, ExecutionRecord, Exercise, PlanEntry};

/// Wrapper type for displaying the result of create operations: a one-line
/// confirmation naming the new record, followed by the record itself.
///
/// # Examples
///
/// ```rust
/// use ironlog_core::{
///     display::CreateResult,
///     models::{ExecutionType, Exercise},
/// };
/// use jiff::Timestamp;
///
/// let exercise = Exercise {
///     id: 7,
///     name: "Prancha".to_string(),
///     muscle_group: "Core".to_string(),
///     execution_type: ExecutionType::Timed,
///     owner: Some("local".to_string()),
///     created_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(exercise).to_string();
/// assert!(output.starts_with("Created exercise with ID: 7"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Exercise> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created exercise with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<PlanEntry> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added plan entry with ID: {} to {}",
            self.resource.id, self.resource.week_day
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ExecutionRecord> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged execution with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<CardioSession> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged cardio session with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<DailyLog> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved daily log for {}", self.resource.date)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
