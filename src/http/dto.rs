//! Request and response bodies.

use crate::task::domain::{Task, TaskId};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/v1/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskBody {
    /// Task name.
    pub name: String,
    /// Owning user.
    pub user_id: UserId,
    /// Due date text.
    pub due_date: String,
    /// Optional initial delay count.
    #[serde(default)]
    pub delay_count: Option<i32>,
}

/// Body of `PUT /api/v1/tasks/{id}/extend`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtendDueDateBody {
    /// Task identifier; must match the path when present.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// New due date text.
    pub due_date: String,
}

/// Body of `PUT /api/v1/tasks/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeStatusBody {
    /// Task identifier; must match the path when present.
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Requested status text.
    pub new_status: String,
}

/// Response to a successful task creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    /// Identifier assigned by the store.
    pub task_id: TaskId,
}

/// Response to a successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `"success"`.
    pub message: String,
}

impl SuccessResponse {
    /// Creates the standard success body.
    #[must_use]
    pub fn success() -> Self {
        Self {
            message: "success".to_owned(),
        }
    }
}

/// Task projection returned by read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Owning user.
    pub user_id: UserId,
    /// Canonical status text.
    pub status: String,
    /// Due date text.
    pub due_date: String,
    /// Number of due date extensions.
    pub delay_count: i32,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            name: task.name().to_owned(),
            user_id: task.owner_id(),
            status: task.status().as_str().to_owned(),
            due_date: task.due_date().to_owned(),
            delay_count: task.delay_count(),
        }
    }
}
