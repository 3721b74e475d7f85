//! Error types for schedule generation.
//!
//! Only bad input or bad configuration fails a run. Unfilled slots and
//! an optimizer that hits its pass cap are normal outcomes reported
//! through the schedule metrics.

use thiserror::Error;

use crate::config::ConfigError;
use crate::validation::ValidationError;

/// Main error type for schedule generation.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Roster or forecast failed validation.
    #[error("Invalid input: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// Scheduler configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::Validation(errors)
    }
}

impl ScheduleError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::Validation(errors) => errors,
            ScheduleError::Config(_) => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for schedule generation.
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Role};
    use crate::validation::validate_input;

    #[test]
    fn test_validation_message_lists_all() {
        let employees = vec![
            Employee::new("a", Role::Crew).with_max_hours(-1.0),
            Employee::new("b", Role::Crew).with_rate(-2.0),
        ];
        let err: ScheduleError = validate_input(&employees, &[]).unwrap_err().into();
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid input: "));
        assert!(msg.contains("'a'"));
        assert!(msg.contains("'b'"));
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_config_error_transparent() {
        let err: ScheduleError = ConfigError::Invalid("shift_blocks is empty".into()).into();
        assert_eq!(err.to_string(), "Invalid configuration: shift_blocks is empty");
        assert!(err.validation_errors().is_empty());
    }
}
