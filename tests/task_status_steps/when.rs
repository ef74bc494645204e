//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use taskboard::task::{domain::TaskStatus, services::CreateTaskRequest};
use taskboard::user::domain::UserId;

#[when(r#"the task status is changed to "{status}""#)]
fn change_status(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    let new_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let result = run_async(world.service.change_status(id, new_status));
    world.last_change_result = Some(result);
    Ok(())
}

#[when(r#"the due date is extended to "{due_date}""#)]
fn extend_due_date(world: &mut TaskStatusWorld, due_date: String) -> Result<(), eyre::Report> {
    let id = world.created_id()?;
    let result = run_async(world.service.extend_due_date(id, due_date));
    world.last_change_result = Some(result);
    Ok(())
}

#[when(r#"a task without a name owned by user {owner:i64} due "{due_date}" is submitted"#)]
fn submit_unnamed_task(world: &mut TaskStatusWorld, owner: i64, due_date: String) {
    let request = CreateTaskRequest::new("", UserId::new(owner), due_date);
    let result = run_async(world.service.create_task(request));
    if let Ok(id) = result {
        world.last_created_id = Some(id);
    }
    world.last_create_result = Some(result);
}
