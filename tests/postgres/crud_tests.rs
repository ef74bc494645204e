//! Repository reads and writes against a live database.

use crate::postgres::helpers::{TaskDb, task_db};
use rstest::rstest;
use taskboard::task::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use taskboard::user::domain::UserId;

fn stored(db: &TaskDb, id: TaskId) -> eyre::Result<Task> {
    db.block_on(db.repo.find_by_id(id))?
        .ok_or_else(|| eyre::eyre!("task {id} missing from the database"))
}

#[rstest]
fn insert_then_find_restores_every_field(
    task_db: eyre::Result<Option<TaskDb>>,
) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let long_name = "長".repeat(300);
    let long_due_date = "2024-01-01 ".repeat(40);
    let task = Task::with_delay_count(long_name.clone(), UserId::new(7), long_due_date.clone(), 3);

    let id = db.block_on(db.repo.insert(&task))?;
    let found = stored(&db, id)?;

    eyre::ensure!(!id.is_unassigned());
    eyre::ensure!(found.id() == id);
    eyre::ensure!(found.name() == long_name);
    eyre::ensure!(found.owner_id() == UserId::new(7));
    eyre::ensure!(found.status() == TaskStatus::Incomplete);
    eyre::ensure!(found.due_date() == long_due_date);
    eyre::ensure!(found.delay_count() == 3);
    Ok(())
}

#[rstest]
fn insert_ignores_carried_id_and_assigns_increasing_ids(
    task_db: eyre::Result<Option<TaskDb>>,
) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let carried = Task::new("first", UserId::new(1), "2024-01-01").with_id(TaskId::new(500));

    let first = db.block_on(db.repo.insert(&carried))?;
    let second = db.block_on(db.repo.insert(&Task::new("second", UserId::new(1), "2024-01-02")))?;

    eyre::ensure!(first != TaskId::new(500));
    eyre::ensure!(second.value() > first.value());
    Ok(())
}

#[rstest]
fn find_by_id_of_missing_task_is_none(task_db: eyre::Result<Option<TaskDb>>) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };

    let found = db.block_on(db.repo.find_by_id(TaskId::new(404)))?;

    eyre::ensure!(found.is_none());
    Ok(())
}

#[rstest]
fn find_by_owner_filters_and_orders_by_id(
    task_db: eyre::Result<Option<TaskDb>>,
) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let first = db.block_on(db.repo.insert(&Task::new("a", UserId::new(2), "2024-01-01")))?;
    db.block_on(db.repo.insert(&Task::new("b", UserId::new(3), "2024-01-01")))?;
    let third = db.block_on(db.repo.insert(&Task::new("c", UserId::new(2), "2024-01-01")))?;

    let owned = db.block_on(db.repo.find_by_owner(UserId::new(2)))?;
    let ids: Vec<TaskId> = owned.iter().map(Task::id).collect();

    eyre::ensure!(ids == vec![first, third], "unexpected ids {ids:?}");
    eyre::ensure!(db.block_on(db.repo.find_by_owner(UserId::new(9)))?.is_empty());
    Ok(())
}

#[rstest]
fn update_persists_extension_and_completion(
    task_db: eyre::Result<Option<TaskDb>>,
) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let id = db.block_on(db.repo.insert(&Task::new("report", UserId::new(4), "2024-01-01")))?;
    let mut task = stored(&db, id)?;
    task.extend_due_date("2024-02-01")?;
    task.set_status(TaskStatus::Complete)?;

    db.block_on(db.repo.update(&task))?;
    let found = stored(&db, id)?;

    eyre::ensure!(found == task);
    eyre::ensure!(found.delay_count() == 1);
    eyre::ensure!(found.status() == TaskStatus::Complete);
    Ok(())
}

#[rstest]
fn update_of_missing_task_is_not_found(task_db: eyre::Result<Option<TaskDb>>) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let ghost = Task::new("ghost", UserId::new(1), "2024-01-01").with_id(TaskId::new(77));

    let result = db.block_on(db.repo.update(&ghost));

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(77)),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[rstest]
fn delete_removes_task_once(task_db: eyre::Result<Option<TaskDb>>) -> eyre::Result<()> {
    let Some(db) = task_db? else {
        return Ok(());
    };
    let id = db.block_on(db.repo.insert(&Task::new("done", UserId::new(5), "2024-01-01")))?;

    db.block_on(db.repo.delete(id))?;
    let second = db.block_on(db.repo.delete(id));

    eyre::ensure!(db.block_on(db.repo.find_by_id(id))?.is_none());
    eyre::ensure!(
        matches!(second, Err(TaskRepositoryError::NotFound(missing)) if missing == id),
        "unexpected result {second:?}"
    );
    Ok(())
}
