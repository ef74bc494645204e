//! Application configuration loaded from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file in the working directory. Only `DATABASE_URL` selects
//! behaviour; every other setting has a default.

use crate::task::adapters::postgres::ConnectSettings;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set to a value that cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Name of the environment variable.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// The `.env` file exists but could not be read.
    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Server and storage settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// HTTP bind host.
    pub app_host: String,
    /// HTTP bind port.
    pub app_port: u16,
    /// Maximum database pool size.
    pub db_pool_size: u32,
    /// Database connection attempts before startup fails.
    pub db_connect_attempts: u32,
    /// Pause between database connection attempts.
    pub db_connect_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            app_host: "0.0.0.0".to_owned(),
            app_port: 8080,
            db_pool_size: 5,
            db_connect_attempts: 5,
            db_connect_interval: Duration::from_secs(2),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the process environment and `.env`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the `.env` file is unreadable or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a numeric value fails to
    /// parse or the pool size is zero.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let db_pool_size = parse_or("DB_POOL_SIZE", get("DB_POOL_SIZE"), defaults.db_pool_size)?;
        if db_pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_POOL_SIZE",
                message: "must be at least 1".to_owned(),
            });
        }

        Ok(Self {
            database_url: get("DATABASE_URL"),
            app_host: get("APP_HOST").unwrap_or(defaults.app_host),
            app_port: parse_or("APP_PORT", get("APP_PORT"), defaults.app_port)?,
            db_pool_size,
            db_connect_attempts: parse_or(
                "DB_CONNECT_ATTEMPTS",
                get("DB_CONNECT_ATTEMPTS"),
                defaults.db_connect_attempts,
            )?,
            db_connect_interval: Duration::from_secs(parse_or(
                "DB_CONNECT_INTERVAL_SECS",
                get("DB_CONNECT_INTERVAL_SECS"),
                defaults.db_connect_interval.as_secs(),
            )?),
        })
    }

    /// Returns the `host:port` address the server binds to.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app_host, self.app_port)
    }

    /// Returns database connection settings when a database is configured.
    #[must_use]
    pub fn connect_settings(&self) -> Option<ConnectSettings> {
        self.database_url.as_ref().map(|url| ConnectSettings {
            database_url: url.clone(),
            pool_size: self.db_pool_size,
            attempts: self.db_connect_attempts,
            interval: self.db_connect_interval,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                key,
                message: format!("{value:?}: {err}"),
            })
    })
}
