//! Domain model for the task store.
//!
//! Tasks are plain aggregates with validated text, status, priority and due
//! date fields. Querying and partial updates are expressed as value types
//! ([`TaskFilters`], [`TaskPatch`]) so storage adapters stay free of
//! matching rules.

mod error;
mod filters;
mod ids;
mod patch;
mod task;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use filters::TaskFilters;
pub use ids::{DueDate, TaskId};
pub use patch::TaskPatch;
pub use task::{NewTaskData, PersistedTaskData, Task, TaskPriority, TaskStatus};
