//! Generation status for task-polling wrappers.
//!
//! Services that run generation in the background report progress with a
//! three-state contract: pending, then success with a schedule or failure
//! with an error message. [`GenerationStatus`] is that contract, and a
//! finished `generate` call converts into it directly.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::Schedule;

/// State of a background generation task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenerationStatus {
    /// Queued or running.
    Pending,
    /// Finished with a schedule.
    Success { schedule: Schedule },
    /// Rejected before scheduling.
    Failure { error: String },
}

impl GenerationStatus {
    /// Returns the status as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Pending => "PENDING",
            GenerationStatus::Success { .. } => "SUCCESS",
            GenerationStatus::Failure { .. } => "FAILURE",
        }
    }

    /// Whether the task has finished, successfully or not.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GenerationStatus::Pending)
    }

    /// The schedule, if generation succeeded.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            GenerationStatus::Success { schedule } => Some(schedule),
            _ => None,
        }
    }
}

impl From<Result<Schedule, ScheduleError>> for GenerationStatus {
    fn from(result: Result<Schedule, ScheduleError>) -> Self {
        match result {
            Ok(schedule) => GenerationStatus::Success { schedule },
            Err(e) => GenerationStatus::Failure {
                error: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Role};
    use crate::scheduler::ShiftScheduler;

    #[test]
    fn test_success_from_result() {
        let status: GenerationStatus = ShiftScheduler::new().generate(&[], &[]).into();
        assert_eq!(status.as_str(), "SUCCESS");
        assert!(status.is_finished());
        assert_eq!(status.schedule().map(|s| s.coverage_score), Some(100));
    }

    #[test]
    fn test_failure_from_result() {
        let bad = vec![Employee::new("e", Role::Crew).with_rate(-1.0)];
        let status: GenerationStatus = ShiftScheduler::new().generate(&bad, &[]).into();
        assert_eq!(status.as_str(), "FAILURE");
        assert!(status.schedule().is_none());
        match status {
            GenerationStatus::Failure { error } => assert!(error.contains("hourlyRate")),
            other => panic!("unexpected status: {other:?}"),
        }
    }

    #[test]
    fn test_pending() {
        let status = GenerationStatus::Pending;
        assert!(!status.is_finished());
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            serde_json::json!({ "status": "PENDING" })
        );
    }

    #[test]
    fn test_json_tagging() {
        let status = GenerationStatus::Failure {
            error: "boom".into(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["status"], "FAILURE");
        assert_eq!(json["error"], "boom");

        let back: GenerationStatus = serde_json::from_value(json).unwrap();
        assert_eq!(back, status);
    }
}
