//! Service layer for task creation, due date extension, and status changes.

use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::domain::UserId;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    owner_id: UserId,
    due_date: String,
    delay_count: i32,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(name: impl Into<String>, owner_id: UserId, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_id,
            due_date: due_date.into(),
            delay_count: 0,
        }
    }

    /// Sets an initial delay count.
    #[must_use]
    pub fn with_delay_count(mut self, delay_count: i32) -> Self {
        self.delay_count = delay_count;
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation or a status transition failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task use-case orchestration service.
///
/// Each operation performs at most one repository write, and none when
/// validation, lookup, or a status transition fails.
pub struct TaskLifecycleService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TaskLifecycleService<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TaskLifecycleService<R>
where
    R: TaskRepository,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates and stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when a field is invalid, in
    /// which case the repository is not called, or
    /// [`TaskLifecycleError::Repository`] when the insert fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<TaskId> {
        let task = Task::with_delay_count(
            request.name,
            request.owner_id,
            request.due_date,
            request.delay_count,
        );
        task.validate()?;

        let id = self.repository.insert(&task).await?;
        tracing::info!(task_id = %id, owner_id = %task.owner_id(), "task created");
        Ok(id)
    }

    /// Moves a task's due date and counts the delay.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when the new due date is empty, or
    /// [`TaskLifecycleError::Repository`] when lookup or update fails.
    pub async fn extend_due_date(
        &self,
        id: TaskId,
        new_due_date: impl Into<String> + Send,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        task.extend_due_date(new_due_date)?;
        self.repository.update(&task).await.map_err(map_missing)?;
        tracing::debug!(
            task_id = %id,
            due_date = task.due_date(),
            delay_count = task.delay_count(),
            "task due date extended"
        );
        Ok(task)
    }

    /// Changes a task's completion status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::Domain`] when the transition is rejected, or
    /// [`TaskLifecycleError::Repository`] when lookup or update fails.
    pub async fn change_status(
        &self,
        id: TaskId,
        new_status: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load(id).await?;
        task.set_status(new_status)?;
        self.repository.update(&task).await.map_err(map_missing)?;
        tracing::debug!(task_id = %id, status = new_status.as_str(), "task status changed");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn find_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.load(id).await
    }

    /// Lists the tasks owned by a user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn tasks_for_owner(&self, owner_id: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_owner(owner_id).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when deletion fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await.map_err(map_missing)?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn load(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))
    }
}

/// Reports a task that vanished from the store as [`TaskLifecycleError::NotFound`].
fn map_missing(err: TaskRepositoryError) -> TaskLifecycleError {
    match err {
        TaskRepositoryError::NotFound(id) => TaskLifecycleError::NotFound(id),
        other => TaskLifecycleError::Repository(other),
    }
}
