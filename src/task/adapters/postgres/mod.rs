//! `PostgreSQL` adapters for task persistence.

mod bootstrap;
mod models;
mod repository;
mod schema;

pub use bootstrap::{
    BootstrapError, CREATE_TASKS_SQL, ConnectSettings, connect_with_retry, ensure_schema,
};
pub use repository::{PostgresTaskRepository, TaskPgPool};
