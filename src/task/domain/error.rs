//! Error types for task domain validation and status transitions.

use super::TaskId;
use thiserror::Error;

/// Errors returned by task validation and mutation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty.
    #[error("invalid task name")]
    InvalidName,

    /// The owning user identifier is zero.
    #[error("invalid user id")]
    InvalidOwner,

    /// The due date is empty.
    #[error("invalid due date")]
    InvalidDueDate,

    /// The delay counter is negative.
    #[error("invalid delay count {0}, expected a non-negative integer")]
    InvalidDelayCount(i32),

    /// The task is complete and cannot be completed again.
    #[error("task {0} is already completed")]
    AlreadyCompleted(TaskId),

    /// The task is complete and cannot return to incomplete.
    #[error("task {0} cannot revert to incomplete")]
    CannotRevert(TaskId),
}

impl TaskDomainError {
    /// Returns `true` for field validation failures.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidName
                | Self::InvalidOwner
                | Self::InvalidDueDate
                | Self::InvalidDelayCount(_)
        )
    }

    /// Returns `true` for rejected status transitions.
    #[must_use]
    pub const fn is_state_transition(&self) -> bool {
        matches!(self, Self::AlreadyCompleted(_) | Self::CannotRevert(_))
    }
}

/// Error returned while parsing task statuses from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
