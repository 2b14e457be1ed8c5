//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wire format for due dates.
const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of a zero-padded `YYYY-MM-DD` string.
const DUE_DATE_LEN: usize = 10;

/// Unique identifier for a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random task identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a task identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Calendar date a task is due, exchanged as an ISO `YYYY-MM-DD` string.
///
/// Ordering follows calendar order, which for this format is the same as
/// lexicographic ordering of the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Parses a due date from its ISO string form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingDueDate`] when the value is blank and
    /// [`TaskDomainError::InvalidDueDate`] when it is not a valid
    /// `YYYY-MM-DD` date.
    pub fn parse(value: &str) -> Result<Self, TaskDomainError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::MissingDueDate);
        }
        // chrono accepts unpadded fields such as `2024-6-1`.
        if trimmed.len() != DUE_DATE_LEN {
            return Err(TaskDomainError::InvalidDueDate(value.to_owned()));
        }
        NaiveDate::parse_from_str(trimmed, DUE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDueDate(value.to_owned()))
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DUE_DATE_FORMAT))
    }
}

impl TryFrom<String> for DueDate {
    type Error = TaskDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        value.to_string()
    }
}
