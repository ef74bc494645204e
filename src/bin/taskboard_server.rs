//! Taskboard HTTP server.
//!
//! Reads configuration from the environment, connects to `PostgreSQL` when
//! `DATABASE_URL` is set (falling back to in-memory storage otherwise), and
//! serves the task API until interrupted.

use std::process::ExitCode;
use std::sync::Arc;

use taskboard::config::AppConfig;
use taskboard::http::{AppState, create_router};
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::{
    BootstrapError, PostgresTaskRepository, connect_with_retry, ensure_schema,
};
use taskboard::telemetry::init_tracing;
use thiserror::Error;
use tokio::net::TcpListener;

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] taskboard::config::ConfigError),
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    #[error("server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "taskboard server stopped with an error");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;
    let router = match config.connect_settings() {
        Some(settings) => {
            let pool = connect_with_retry(&settings).await?;
            ensure_schema(&pool).await?;
            tracing::info!("using PostgreSQL task store");
            create_router(AppState::new(Arc::new(PostgresTaskRepository::new(pool))))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, tasks are kept in memory");
            create_router(AppState::new(Arc::new(InMemoryTaskRepository::new())))
        }
    };

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!(address = %bind_address, "taskboard server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("taskboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
