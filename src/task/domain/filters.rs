//! Conjunctive task query descriptor.

use super::{DueDate, Task, TaskPriority, TaskStatus};
use crate::session::domain::UserId;
use serde::{Deserialize, Deserializer};

/// Query constraints over the task collection.
///
/// Every field is optional; an absent field places no constraint on its
/// dimension and present fields are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFilters {
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    #[serde(deserialize_with = "optional_assignee")]
    assigned_to: Option<UserId>,
    search: Option<String>,
    start_date: Option<DueDate>,
    end_date: Option<DueDate>,
}

impl TaskFilters {
    /// Creates a filter set that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts results to tasks with the given priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts results to tasks assigned to `assignee`.
    #[must_use]
    pub fn with_assignee(mut self, assignee: UserId) -> Self {
        self.assigned_to = Some(assignee);
        self
    }

    /// Restricts results to tasks whose title or description contains
    /// `search`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Restricts results to tasks due on or after `start`.
    #[must_use]
    pub const fn with_start_date(mut self, start: DueDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Restricts results to tasks due on or before `end`.
    #[must_use]
    pub const fn with_end_date(mut self, end: DueDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Returns `true` when no dimension is constrained.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.assigned_to.is_none()
            && self.search_term().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Returns `true` when `task` satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.status.is_none_or(|status| task.status() == status)
            && self.priority.is_none_or(|priority| task.priority() == priority)
            && self
                .assigned_to
                .as_ref()
                .is_none_or(|assignee| task.assigned_to() == Some(assignee))
            && self.search_term().is_none_or(|term| matches_search(task, term))
            && self.start_date.is_none_or(|start| task.due_date() >= start)
            && self.end_date.is_none_or(|end| task.due_date() <= end)
    }

    /// An empty search string constrains nothing.
    fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}

fn matches_search(task: &Task, term: &str) -> bool {
    let needle = term.to_lowercase();
    task.title().to_lowercase().contains(&needle)
        || task.description().to_lowercase().contains(&needle)
}

/// An empty assignee constrains nothing, matching an empty search.
fn optional_assignee<'de, D>(deserializer: D) -> Result<Option<UserId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    raw.filter(|value| !value.trim().is_empty())
        .map(UserId::new)
        .transpose()
        .map_err(serde::de::Error::custom)
}
