//! In-memory repository for task storage.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::domain::UserId;

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned sequentially starting at 1, mirroring a database
/// sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    last_id: i64,
    tasks: BTreeMap<TaskId, Task>,
    owner_index: HashMap<UserId, BTreeSet<TaskId>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

/// Removes a task ID from the owner index, cleaning up the entry if empty.
fn unindex_owner(state: &mut InMemoryTaskState, owner_id: UserId, task_id: TaskId) {
    if let Some(ids) = state.owner_index.get_mut(&owner_id) {
        ids.remove(&task_id);
        if ids.is_empty() {
            state.owner_index.remove(&owner_id);
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let tasks = state
            .owner_index
            .get(&owner_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.tasks.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(tasks)
    }

    async fn insert(&self, task: &Task) -> TaskRepositoryResult<TaskId> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.last_id = state.last_id.saturating_add(1);
        let id = TaskId::new(state.last_id);

        state
            .owner_index
            .entry(task.owner_id())
            .or_default()
            .insert(id);
        state.tasks.insert(id, task.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let previous_owner = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?
            .owner_id();

        if previous_owner != task.owner_id() {
            unindex_owner(&mut state, previous_owner, task.id());
            state
                .owner_index
                .entry(task.owner_id())
                .or_default()
                .insert(task.id());
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .tasks
            .remove(&id)
            .ok_or(TaskRepositoryError::NotFound(id))?;
        unindex_owner(&mut state, removed.owner_id(), id);
        Ok(())
    }
}
