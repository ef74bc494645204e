//! Connection pool construction and schema bootstrap for `PostgreSQL`.

use super::TaskPgPool;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use std::time::Duration;
use thiserror::Error;

/// SQL creating the task table when it does not exist yet.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2026-10-18-000000_create_tasks/up.sql");

/// Errors raised while preparing the `PostgreSQL` store.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Every connection attempt failed.
    #[error("failed to connect to database after {attempts} attempts: {source}")]
    Connect {
        /// Number of attempts made.
        attempts: u32,
        /// Error from the final attempt.
        #[source]
        source: PoolError,
    },

    /// A pooled connection could not be checked out.
    #[error("failed to check out a database connection: {0}")]
    Checkout(#[source] PoolError),

    /// Applying the schema failed.
    #[error("failed to apply task schema: {0}")]
    Schema(#[source] diesel::result::Error),

    /// A blocking bootstrap task panicked or was cancelled.
    #[error("bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Settings for [`connect_with_retry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectSettings {
    /// Database connection URL.
    pub database_url: String,
    /// Maximum pool size.
    pub pool_size: u32,
    /// Number of connection attempts before giving up. Zero is treated as one.
    pub attempts: u32,
    /// Pause between failed attempts.
    pub interval: Duration,
}

/// Builds a connection pool, retrying while the database is unreachable.
///
/// # Errors
///
/// Returns [`BootstrapError::Connect`] with the last pool error once all
/// attempts have failed.
pub async fn connect_with_retry(settings: &ConnectSettings) -> Result<TaskPgPool, BootstrapError> {
    let attempts = settings.attempts.max(1);
    let mut attempt = 1;
    loop {
        let url = settings.database_url.clone();
        let pool_size = settings.pool_size;
        let interval = settings.interval;
        let built = tokio::task::spawn_blocking(move || {
            Pool::builder()
                .max_size(pool_size)
                .connection_timeout(interval.max(Duration::from_secs(1)))
                .build(ConnectionManager::<PgConnection>::new(url))
        })
        .await?;

        match built {
            Ok(pool) => {
                tracing::info!(attempt, "connected to database");
                return Ok(pool);
            }
            Err(source) if attempt >= attempts => {
                return Err(BootstrapError::Connect { attempts, source });
            }
            Err(err) => {
                tracing::warn!(attempt, error = %err, "failed to connect to database, retrying");
                tokio::time::sleep(settings.interval).await;
                attempt += 1;
            }
        }
    }
}

/// Creates the task table and its indexes if they are missing.
///
/// # Errors
///
/// Returns [`BootstrapError`] when no connection is available or the schema
/// statements fail.
pub async fn ensure_schema(pool: &TaskPgPool) -> Result<(), BootstrapError> {
    let shared = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = shared.get().map_err(BootstrapError::Checkout)?;
        connection
            .batch_execute(CREATE_TASKS_SQL)
            .map_err(BootstrapError::Schema)
    })
    .await?
}
