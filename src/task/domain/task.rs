//! Task aggregate root and related status and priority types.

use super::{
    DueDate, ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError, TaskId, TaskPatch,
};
use crate::session::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task progress status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    Pending,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal urgency.
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

/// Validated field values for a task that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Task priority.
    pub priority: TaskPriority,
    /// Task due date.
    pub due_date: DueDate,
    /// Optional assignee.
    pub assigned_to: Option<UserId>,
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    priority: TaskPriority,
    due_date: DueDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    created_by: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assigned_to: Option<UserId>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description.
    pub description: String,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: TaskPriority,
    /// Persisted due date.
    pub due_date: DueDate,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
    /// Persisted creator.
    pub created_by: UserId,
    /// Persisted assignee, if any.
    pub assigned_to: Option<UserId>,
}

impl Task {
    /// Creates a new pending task owned by `created_by`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when either text field is blank.
    pub fn create(
        data: NewTaskData,
        created_by: UserId,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        ensure_text(&data.title, TaskDomainError::EmptyTitle)?;
        ensure_text(&data.description, TaskDomainError::EmptyDescription)?;

        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: data.title,
            description: data.description,
            status: TaskStatus::Pending,
            priority: data.priority,
            due_date: data.due_date,
            created_at: timestamp,
            updated_at: timestamp,
            created_by,
            assigned_to: data.assigned_to,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            due_date: data.due_date,
            created_at: data.created_at,
            updated_at: data.updated_at,
            created_by: data.created_by,
            assigned_to: data.assigned_to,
        }
    }

    /// Checks the invariants of a task loaded from outside the domain.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: blank title, blank description,
    /// or an update timestamp preceding the creation timestamp.
    pub fn validate_persisted(&self) -> Result<(), TaskDomainError> {
        ensure_text(&self.title, TaskDomainError::EmptyTitle)?;
        ensure_text(&self.description, TaskDomainError::EmptyDescription)?;
        if self.updated_at < self.created_at {
            return Err(TaskDomainError::TimestampOrder(self.id));
        }
        Ok(())
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the identifier of the session that created the task.
    #[must_use]
    pub const fn created_by(&self) -> &UserId {
        &self.created_by
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub const fn assigned_to(&self) -> Option<&UserId> {
        self.assigned_to.as_ref()
    }

    /// Merges a patch over this task and refreshes `updated_at`.
    ///
    /// Fields absent from the patch are left untouched. The patch is checked
    /// in full before anything is written, so a rejected patch leaves the
    /// task unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] or
    /// [`TaskDomainError::EmptyDescription`] when the patch would blank a
    /// text field.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(title) = patch.title.as_deref() {
            ensure_text(title, TaskDomainError::EmptyTitle)?;
        }
        if let Some(description) = patch.description.as_deref() {
            ensure_text(description, TaskDomainError::EmptyDescription)?;
        }

        let TaskPatch {
            title,
            description,
            status,
            priority,
            due_date,
            assigned_to,
        } = patch;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = description {
            self.description = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = due_date {
            self.due_date = value;
        }
        if let Some(value) = assigned_to {
            self.assigned_to = value;
        }
        self.touch(clock);
        Ok(())
    }

    /// Moves `updated_at` to the current clock time, never backwards.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc().max(self.updated_at);
    }
}

fn ensure_text(value: &str, blank_error: TaskDomainError) -> Result<(), TaskDomainError> {
    if value.trim().is_empty() {
        return Err(blank_error);
    }
    Ok(())
}
