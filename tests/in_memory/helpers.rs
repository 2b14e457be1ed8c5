//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    session::domain::{ProviderIdentity, UserId},
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{DueDate, PersistedTaskData, Task, TaskId, TaskPriority, TaskStatus},
        services::TaskStore,
    },
};

/// Store type used across the in-memory integration tests.
pub type TestStore = TaskStore<InMemoryTaskRepository, DefaultClock>;

/// Builds a user identifier, panicking on blank input.
pub fn user(id: &str) -> UserId {
    UserId::new(id).expect("valid user id")
}

/// Builds a provider identity with an email address.
pub fn identity(uid: &str, email: &str) -> ProviderIdentity {
    ProviderIdentity::new(user(uid)).with_email(email)
}

/// Parses a `YYYY-MM-DD` due date.
pub fn due(date: &str) -> DueDate {
    DueDate::parse(date).expect("valid due date")
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .single()
        .expect("valid fixed timestamp")
}

/// Field values for a task loaded from storage.
pub struct SeedTask<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: &'a str,
    pub assigned_to: Option<&'a str>,
}

impl SeedTask<'_> {
    /// Materialises the seed as a persisted task created by user `owner`.
    pub fn into_task(self) -> Task {
        Task::from_persisted(PersistedTaskData {
            id: TaskId::new(),
            title: self.title.to_owned(),
            description: self.description.to_owned(),
            status: self.status,
            priority: self.priority,
            due_date: due(self.due_date),
            created_at: seeded_at(),
            updated_at: seeded_at() + Duration::hours(1),
            created_by: user("owner"),
            assigned_to: self.assigned_to.map(user),
        })
    }
}

/// Three tasks spanning every status, two priorities and a date range.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        SeedTask {
            title: "Write spec",
            description: "Draft v1",
            status: TaskStatus::Pending,
            priority: TaskPriority::High,
            due_date: "2024-06-01",
            assigned_to: Some("user-1"),
        }
        .into_task(),
        SeedTask {
            title: "Review draft",
            description: "Comment on the SPEC wording",
            status: TaskStatus::Done,
            priority: TaskPriority::Low,
            due_date: "2024-06-15",
            assigned_to: Some("user-2"),
        }
        .into_task(),
        SeedTask {
            title: "Deploy",
            description: "Ship the release",
            status: TaskStatus::InProgress,
            priority: TaskPriority::High,
            due_date: "2024-07-01",
            assigned_to: None,
        }
        .into_task(),
    ]
}

/// Provides an empty task store.
#[fixture]
pub fn store() -> TestStore {
    TaskStore::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a store seeded with [`sample_tasks`], together with the seeds.
#[fixture]
pub fn seeded() -> (TestStore, Vec<Task>) {
    let tasks = sample_tasks();
    let repository =
        InMemoryTaskRepository::with_tasks(tasks.clone()).expect("sample ids are unique");
    (
        TaskStore::new(Arc::new(repository), Arc::new(DefaultClock)),
        tasks,
    )
}
