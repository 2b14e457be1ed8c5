//! Error types for task domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// No priority was supplied.
    #[error("task priority is required")]
    MissingPriority,

    /// The priority value is not one of the supported levels.
    #[error(transparent)]
    InvalidPriority(#[from] ParseTaskPriorityError),

    /// No due date was supplied.
    #[error("task due date is required")]
    MissingDueDate,

    /// The due date is not an ISO `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// A persisted task claims to have been updated before it was created.
    #[error("task {0} has an update timestamp earlier than its creation timestamp")]
    TimestampOrder(TaskId),
}

/// Error returned while parsing task statuses.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
