//! Error types for user validation.

use thiserror::Error;

/// Errors returned while validating users.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserDomainError {
    /// The user name is empty.
    #[error("invalid user name")]
    InvalidName,
}
