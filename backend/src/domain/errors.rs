/// Maximum length of a child's display name
pub const MAX_CHILD_NAME_LEN: usize = 100;

/// Errors surfaced by the domain services.
///
/// Storage failures are carried through untouched in `Persistence`; the
/// services never retry and never update in-memory state after one.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("Child name cannot be empty")]
    EmptyChildName,
    #[error("Child name cannot exceed 100 characters")]
    ChildNameTooLong,
    #[error("Age {0} is outside the supported range 0-18")]
    AgeOutOfRange(i64),
    #[error("Task '{title}' has min_age {min_age} greater than max_age {max_age}")]
    InvalidAgeRange {
        title: String,
        min_age: i64,
        max_age: i64,
    },
    #[error("Task title cannot be empty")]
    EmptyTaskTitle,
    #[error("Task '{title}' must take a positive number of minutes, got {minutes}")]
    NonPositiveTimeEstimate { title: String, minutes: i64 },
    #[error("Child not found: {0}")]
    ChildNotFound(String),
    #[error("Task not found: {0}")]
    TaskNotFound(String),
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}
