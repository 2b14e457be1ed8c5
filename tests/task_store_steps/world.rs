//! Shared world state for task store BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskStore, TaskStoreError},
};

/// Store type used by the BDD world.
pub type TestTaskStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task store behaviour tests.
pub struct TaskStoreWorld {
    pub store: TestTaskStore,
    pub created_task: Option<Task>,
    pub task_before_update: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskStoreError>>,
    pub deletion_results: Vec<bool>,
}

impl TaskStoreWorld {
    /// Creates a world over an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = TaskStore::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(DefaultClock),
        );

        Self {
            store,
            created_task: None,
            task_before_update: None,
            last_create_result: None,
            deletion_results: Vec::new(),
        }
    }

    /// Returns the task created earlier in the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn created_task(&self) -> Result<&Task, eyre::Report> {
        self.created_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for TaskStoreWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStoreWorld {
    TaskStoreWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
