//! Domain model for tasks.
//!
//! A task is a named unit of work owned by a user, with a due date that can be
//! pushed back and a completion status that only moves forward. Validation and
//! the status transition rule live here; persistence does not.

mod error;
mod ids;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{PersistedTaskData, Task, TaskStatus};
