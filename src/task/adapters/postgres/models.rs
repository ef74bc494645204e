//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned task identifier.
    pub id: i64,
    /// Task name.
    pub name: String,
    /// Owning user identifier.
    pub user_id: i64,
    /// Completion status.
    pub status: String,
    /// Due date text.
    pub due_date: String,
    /// Number of due date extensions.
    pub delay_count: i32,
}

/// Insert model for task records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task name.
    pub name: String,
    /// Owning user identifier.
    pub user_id: i64,
    /// Completion status.
    pub status: String,
    /// Due date text.
    pub due_date: String,
    /// Number of due date extensions.
    pub delay_count: i32,
}

/// Full-row changeset applied by updates.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task name.
    pub name: String,
    /// Owning user identifier.
    pub user_id: i64,
    /// Completion status.
    pub status: String,
    /// Due date text.
    pub due_date: String,
    /// Number of due date extensions.
    pub delay_count: i32,
}
