//! Service layer for task listing and CRUD.

use crate::session::domain::UserId;
use crate::task::{
    domain::{
        DueDate, NewTaskData, Task, TaskDomainError, TaskFilters, TaskId, TaskPatch,
        TaskPriority,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task from form input.
///
/// Fields hold raw text; they are validated by [`TaskStore::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: String,
    due_date: String,
    assigned_to: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            due_date: due_date.into(),
            assigned_to: None,
        }
    }

    /// Sets the assignee. A blank value leaves the task unassigned.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = Some(assignee.into());
        self
    }

    fn into_task_data(self) -> Result<NewTaskData, TaskDomainError> {
        if self.title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(TaskDomainError::EmptyDescription);
        }
        if self.priority.trim().is_empty() {
            return Err(TaskDomainError::MissingPriority);
        }
        let priority = TaskPriority::try_from(self.priority.as_str())?;
        let due_date = DueDate::parse(&self.due_date)?;
        let assigned_to = self
            .assigned_to
            .and_then(|assignee| UserId::new(assignee).ok());

        Ok(NewTaskData {
            title: self.title,
            description: self.description,
            priority,
            due_date,
            assigned_to,
        })
    }
}

/// Service-level errors for task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// Input validation failed; the store was not modified.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store: filtered reads and CRUD writes over a task repository.
///
/// Missing targets are reported as `Ok(None)` or `Ok(false)`, never as
/// errors.
#[derive(Clone)]
pub struct TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskStore<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a task store over the given repository and clock.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists tasks matching every present filter, in insertion order.
    ///
    /// The returned tasks are copies; changing them does not affect the
    /// store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository lookup
    /// fails.
    pub async fn list(&self, filters: &TaskFilters) -> TaskStoreResult<Vec<Task>> {
        let tasks = self.repository.find_matching(filters).await?;
        debug!(
            matched = tasks.len(),
            unconstrained = filters.is_unconstrained(),
            "listed tasks"
        );
        Ok(tasks)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository lookup
    /// fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Validates `request` and appends a new pending task created by
    /// `created_by`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when a required field is
    /// missing or malformed, in which case the store is unchanged, and
    /// [`TaskStoreError::Repository`] when persistence fails.
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        created_by: UserId,
    ) -> TaskStoreResult<Task> {
        let task = request
            .into_task_data()
            .and_then(|data| Task::create(data, created_by, &*self.clock))
            .inspect_err(|err| warn!(error = %err, "rejected task creation"))?;
        self.repository.store(&task).await?;
        info!(
            task_id = %task.id(),
            created_by = %task.created_by(),
            priority = task.priority().as_str(),
            "created task"
        );
        Ok(task)
    }

    /// Merges `patch` over the task with the given identifier.
    ///
    /// Returns `Ok(None)` without touching the store when no such task
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Validation`] when the patch would blank a
    /// required text field and [`TaskStoreError::Repository`] when
    /// persistence fails.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let Some(mut task) = self.repository.find_by_id(id).await? else {
            debug!(task_id = %id, "update target not found");
            return Ok(None);
        };
        task.apply_patch(patch, &*self.clock)
            .inspect_err(|err| warn!(task_id = %id, error = %err, "rejected task update"))?;
        if !self.repository.update(&task).await? {
            return Ok(None);
        }
        debug!(task_id = %id, status = task.status().as_str(), "updated task");
        Ok(Some(task))
    }

    /// Deletes the task with the given identifier.
    ///
    /// Returns whether a task was removed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskStoreResult<bool> {
        let removed = self.repository.remove(id).await?;
        if removed {
            info!(task_id = %id, "deleted task");
        }
        Ok(removed)
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Repository`] when the repository lookup
    /// fails.
    pub async fn count(&self) -> TaskStoreResult<usize> {
        Ok(self.repository.count().await?)
    }
}
