//! Shared handler state.

use crate::task::{ports::TaskRepository, services::TaskLifecycleService};
use std::sync::Arc;

/// State shared by every request handler.
pub struct AppState<R>
where
    R: TaskRepository,
{
    tasks: TaskLifecycleService<R>,
}

impl<R> AppState<R>
where
    R: TaskRepository,
{
    /// Creates handler state around a task repository.
    #[must_use]
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            tasks: TaskLifecycleService::new(repository),
        }
    }

    /// Returns the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskLifecycleService<R> {
        &self.tasks
    }
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}
