//! In-memory task repository.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{Task, TaskFilters, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Tasks are kept in insertion order. Clones share the same underlying
/// collection; use [`InMemoryTaskRepository::new`] or
/// [`InMemoryTaskRepository::with_tasks`] for an isolated instance.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    ids: HashSet<TaskId>,
}

impl InMemoryTaskState {
    fn position(&self, id: TaskId) -> Option<usize> {
        if !self.ids.contains(&id) {
            return None;
        }
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `tasks`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when two seed tasks
    /// share an identifier.
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> TaskRepositoryResult<Self> {
        let mut state = InMemoryTaskState::default();
        for task in tasks {
            if !state.ids.insert(task.id()) {
                return Err(TaskRepositoryError::DuplicateTask(task.id()));
            }
            state.tasks.push(task);
        }
        Ok(Self {
            state: Arc::new(RwLock::new(state)),
        })
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        if !state.ids.insert(task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        state.tasks.push(task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(slot) = state.tasks.iter_mut().find(|stored| stored.id() == task.id()) else {
            return Ok(false);
        };
        *slot = task.clone();
        Ok(true)
    }

    async fn remove(&self, id: TaskId) -> TaskRepositoryResult<bool> {
        let mut state = self.write()?;
        let Some(index) = state.position(id) else {
            return Ok(false);
        };
        state.tasks.remove(index);
        state.ids.remove(&id);
        Ok(true)
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }

    async fn find_matching(&self, filters: &TaskFilters) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state
            .tasks
            .iter()
            .filter(|task| filters.matches(task))
            .cloned()
            .collect())
    }

    async fn count(&self) -> TaskRepositoryResult<usize> {
        Ok(self.read()?.tasks.len())
    }
}
