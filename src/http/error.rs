//! Conversion of service errors into HTTP responses.

use crate::task::{domain::TaskDomainError, services::TaskLifecycleError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error message, verbatim from the failing layer.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

/// An error leaving a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Creates a `400 Bad Request` error.
    #[must_use]
    pub fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code,
            message: message.into(),
        }
    }

    /// Creates a `500 Internal Server Error` error.
    #[must_use]
    pub fn internal(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code,
            message: message.into(),
        }
    }

    /// Returns the response status.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TaskLifecycleError> for ApiError {
    fn from(err: TaskLifecycleError) -> Self {
        let code = match &err {
            TaskLifecycleError::Domain(domain) => domain_code(domain),
            TaskLifecycleError::Repository(_) => "repository_error",
            TaskLifecycleError::NotFound(_) => "not_found",
        };
        Self::internal(code, err.to_string())
    }
}

const fn domain_code(err: &TaskDomainError) -> &'static str {
    match err {
        TaskDomainError::InvalidName => "invalid_name",
        TaskDomainError::InvalidOwner => "invalid_owner",
        TaskDomainError::InvalidDueDate => "invalid_due_date",
        TaskDomainError::InvalidDelayCount(_) => "invalid_delay_count",
        TaskDomainError::AlreadyCompleted(_) => "already_completed",
        TaskDomainError::CannotRevert(_) => "cannot_revert",
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            status = %self.status,
            code = self.code,
            error = %self.message,
            "request failed"
        );
        let body = ErrorBody {
            error: self.message,
            code: self.code.to_owned(),
        };
        (self.status, Json(body)).into_response()
    }
}
