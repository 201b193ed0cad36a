use thiserror::Error;

use crate::text::char_len;

use super::{
    SprintTask, StandupRequest, StandupSummary, StoriesRequest, StoriesResult, TasksRequest,
    TasksResult, UserStory,
};

/// Smallest and largest story point estimate.
pub const STORY_POINTS_RANGE: (u32, u32) = (1, 21);

/// Smallest hour estimate a task may carry.
pub const MIN_ESTIMATED_HOURS: f64 = 0.5;

/// Minimum length of meeting notes, in characters.
pub const MIN_NOTES_LENGTH: usize = 10;

/// Longest sprint, in days.
pub const MAX_SPRINT_DURATION_DAYS: u32 = 30;

/// A record that breaks a schema constraint.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at least {min} characters, got {actual}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    #[error("{field} must be {expected}, got {actual}")]
    OutOfRange {
        field: &'static str,
        expected: String,
        actual: String,
    },
}

/// Schema checks for records crossing the engine boundary.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn validate_all<T: Validate>(items: &[T]) -> Result<(), ValidationError> {
    items.iter().try_for_each(Validate::validate)
}

impl Validate for UserStory {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("story title", &self.title)?;
        if let Some(points) = self.story_points {
            let (min, max) = STORY_POINTS_RANGE;
            if !(min..=max).contains(&points) {
                return Err(ValidationError::OutOfRange {
                    field: "story_points",
                    expected: format!("between {} and {}", min, max),
                    actual: points.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for SprintTask {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("task title", &self.title)?;
        if let Some(hours) = self.estimated_hours {
            if hours.is_nan() || hours < MIN_ESTIMATED_HOURS {
                return Err(ValidationError::OutOfRange {
                    field: "estimated_hours",
                    expected: format!("at least {}", MIN_ESTIMATED_HOURS),
                    actual: hours.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Validate for StandupSummary {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_all(&self.suggested_tasks)?;
        validate_all(&self.suggested_stories)
    }
}

impl Validate for StoriesResult {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_all(&self.stories)
    }
}

impl Validate for TasksResult {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_all(&self.tasks)
    }
}

impl Validate for StandupRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::Empty { field: "entries" });
        }
        self.entries
            .iter()
            .try_for_each(|entry| require_text("entry name", &entry.name))
    }
}

impl Validate for StoriesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        let actual = char_len(&self.notes);
        if actual < MIN_NOTES_LENGTH {
            return Err(ValidationError::TooShort {
                field: "notes",
                min: MIN_NOTES_LENGTH,
                actual,
            });
        }
        Ok(())
    }
}

impl Validate for TasksRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.user_stories.is_empty() {
            return Err(ValidationError::Empty {
                field: "user_stories",
            });
        }
        if self.team_capacity == Some(0) {
            return Err(ValidationError::OutOfRange {
                field: "team_capacity",
                expected: "at least 1".to_string(),
                actual: "0".to_string(),
            });
        }
        if !(1..=MAX_SPRINT_DURATION_DAYS).contains(&self.sprint_duration_days) {
            return Err(ValidationError::OutOfRange {
                field: "sprint_duration_days",
                expected: format!("between 1 and {}", MAX_SPRINT_DURATION_DAYS),
                actual: self.sprint_duration_days.to_string(),
            });
        }
        Ok(())
    }
}
