//! Application services for the task store.

mod store;

pub use store::{CreateTaskRequest, TaskStore, TaskStoreError, TaskStoreResult};
