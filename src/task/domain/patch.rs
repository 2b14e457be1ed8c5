//! Partial task updates.

use super::{DueDate, TaskPriority, TaskStatus};
use crate::session::domain::UserId;
use serde::{Deserialize, Deserializer};

/// Partial set of task fields to merge over an existing task.
///
/// There is no field for the identifier, creation timestamp or creator.
/// When a patch is deserialised, `id`, `createdAt` and `createdBy` keys are
/// ignored along with any other unknown key.
///
/// `assigned_to` is tri-state: absent leaves the assignee alone, `null`
/// clears it, and a value replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) status: Option<TaskStatus>,
    #[serde(default)]
    pub(crate) priority: Option<TaskPriority>,
    #[serde(default)]
    pub(crate) due_date: Option<DueDate>,
    #[serde(default, deserialize_with = "present")]
    pub(crate) assigned_to: Option<Option<UserId>>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DueDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Assigns the task to `assignee`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(Some(assignee));
        self
    }

    /// Clears the current assignee.
    #[must_use]
    pub fn without_assignee(mut self) -> Self {
        self.assigned_to = Some(None);
        self
    }
}

/// Marks a field as present, so an explicit `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
