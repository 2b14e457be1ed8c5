//! Given steps for task store BDD scenarios.

use super::world::{TaskStoreWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{session::domain::UserId, task::services::CreateTaskRequest};

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskStoreWorld) -> Result<(), eyre::Report> {
    let count = run_async(world.store.count()).wrap_err("count tasks in fresh store")?;
    if count != 0 {
        return Err(eyre::eyre!("expected an empty store, found {count} tasks"));
    }
    Ok(())
}

#[given(
    r#""{user}" has created a task "{title}" described as "{description}" with priority "{priority}" due "{due_date}""#
)]
fn task_has_been_created(
    world: &mut TaskStoreWorld,
    user: String,
    title: String,
    description: String,
    priority: String,
    due_date: String,
) -> Result<(), eyre::Report> {
    let created_by = UserId::new(user).wrap_err("scenario user id")?;
    let request = CreateTaskRequest::new(title, description, priority, due_date);
    let created = run_async(world.store.create(request, created_by))
        .wrap_err("create task for scenario setup")?;
    world.created_task = Some(created);
    Ok(())
}
