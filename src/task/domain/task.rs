//! Task entity and completion status.

use super::{ParseTaskStatusError, TaskDomainError, TaskId};
use crate::user::domain::UserId;
use serde::{Deserialize, Serialize};

/// Completion status of a task.
///
/// Status only moves forward: an incomplete task may be completed once, and a
/// completed task never changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum TaskStatus {
    /// Work on the task is outstanding.
    #[default]
    Incomplete,
    /// The task has been completed.
    Complete,
}

impl TaskStatus {
    /// Legacy storage literal for [`TaskStatus::Incomplete`].
    const LEGACY_INCOMPLETE: &'static str = "未完了";
    /// Legacy storage literal for [`TaskStatus::Complete`].
    const LEGACY_COMPLETE: &'static str = "完了";

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    /// Returns `true` if no further status change is accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed == Self::LEGACY_INCOMPLETE {
            return Ok(Self::Incomplete);
        }
        if trimmed == Self::LEGACY_COMPLETE {
            return Ok(Self::Complete);
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "incomplete" => Ok(Self::Incomplete),
            "complete" => Ok(Self::Complete),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

/// Task entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    owner_id: UserId,
    status: TaskStatus,
    due_date: String,
    delay_count: i32,
}

/// Parameter object for reconstructing a stored task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Owning user.
    pub owner_id: UserId,
    /// Completion status.
    pub status: TaskStatus,
    /// Due date text.
    pub due_date: String,
    /// Number of due date extensions.
    pub delay_count: i32,
}

impl Task {
    /// Creates an incomplete task that has never been delayed.
    ///
    /// The task is not validated; call [`Task::validate`] before storing it.
    #[must_use]
    pub fn new(name: impl Into<String>, owner_id: UserId, due_date: impl Into<String>) -> Self {
        Self::with_delay_count(name, owner_id, due_date, 0)
    }

    /// Creates an incomplete task carrying an initial delay count.
    #[must_use]
    pub fn with_delay_count(
        name: impl Into<String>,
        owner_id: UserId,
        due_date: impl Into<String>,
        delay_count: i32,
    ) -> Self {
        Self {
            id: TaskId::UNASSIGNED,
            name: name.into(),
            owner_id,
            status: TaskStatus::Incomplete,
            due_date: due_date.into(),
            delay_count,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            owner_id: data.owner_id,
            status: data.status,
            due_date: data.due_date,
            delay_count: data.delay_count,
        }
    }

    /// Returns this task carrying a store-assigned identifier.
    #[must_use]
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = id;
        self
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the completion status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the due date text.
    #[must_use]
    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Returns how many times the due date has been extended.
    #[must_use]
    pub const fn delay_count(&self) -> i32 {
        self.delay_count
    }

    /// Checks the field invariants.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, checked in this order:
    /// [`TaskDomainError::InvalidName`], [`TaskDomainError::InvalidOwner`],
    /// [`TaskDomainError::InvalidDueDate`],
    /// [`TaskDomainError::InvalidDelayCount`].
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.name.is_empty() {
            return Err(TaskDomainError::InvalidName);
        }
        if self.owner_id.is_unassigned() {
            return Err(TaskDomainError::InvalidOwner);
        }
        if self.due_date.is_empty() {
            return Err(TaskDomainError::InvalidDueDate);
        }
        if self.delay_count < 0 {
            return Err(TaskDomainError::InvalidDelayCount(self.delay_count));
        }
        Ok(())
    }

    /// Changes the completion status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AlreadyCompleted`] when completing a
    /// completed task and [`TaskDomainError::CannotRevert`] when reopening
    /// one. The task is left unchanged on error.
    pub fn set_status(&mut self, new_status: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.is_terminal() {
            return Err(match new_status {
                TaskStatus::Complete => TaskDomainError::AlreadyCompleted(self.id),
                TaskStatus::Incomplete => TaskDomainError::CannotRevert(self.id),
            });
        }
        self.status = new_status;
        Ok(())
    }

    /// Moves the due date and records one more delay.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDueDate`] when the new due date is
    /// empty. The task is left unchanged on error.
    pub fn extend_due_date(
        &mut self,
        new_due_date: impl Into<String>,
    ) -> Result<(), TaskDomainError> {
        let due_date = new_due_date.into();
        if due_date.is_empty() {
            return Err(TaskDomainError::InvalidDueDate);
        }
        self.due_date = due_date;
        self.delay_count = self.delay_count.saturating_add(1);
        Ok(())
    }
}
