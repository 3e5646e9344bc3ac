//! Error handling utilities for the MCP server

use ironlog_core::TrackerError;
use rmcp::ErrorData;

/// Converts a tracker error into an MCP error. Bad input and unknown ids are
/// the caller's fault and map to invalid params; everything else is internal.
pub fn to_mcp_error(message: &str, error: &TrackerError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        TrackerError::InvalidInput { .. }
        | TrackerError::ExerciseNotFound { .. }
        | TrackerError::PlanEntryNotFound { .. } => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}

#[cfg(test)]
mod tests {
    use rmcp::model::ErrorCode;

    use super::*;

    #[test]
    fn test_input_errors_are_invalid_params() {
        let err = to_mcp_error(
            "Failed to log execution",
            &TrackerError::ExerciseNotFound { id: 7 },
        );
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(
            err.message,
            "Failed to log execution: Exercise with ID 7 not found"
        );
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err = to_mcp_error(
            "Failed to open",
            &TrackerError::XdgDirectory("no home".to_string()),
        );
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
