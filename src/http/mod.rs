//! HTTP surface for the task board.
//!
//! Handlers decode JSON requests, call [`TaskLifecycleService`] and encode the
//! outcome. Every service error is reported as `500` with its message in the
//! body; malformed requests are reported as `400`.
//!
//! [`TaskLifecycleService`]: crate::task::services::TaskLifecycleService

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
