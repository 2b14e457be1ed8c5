//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskFilters, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations keep tasks in insertion order and hand out owned copies,
/// so callers never hold a reference into the stored collection.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Appends a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task in place, keeping its position.
    ///
    /// Returns `false` when no task with the same identifier exists.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<bool>;

    /// Removes a task.
    ///
    /// Returns `false` when the task does not exist.
    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task matching `filters`, in insertion order.
    async fn find_matching(&self, filters: &TaskFilters) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
