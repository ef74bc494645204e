//! Router construction.

use super::{AppState, handlers};
use crate::task::ports::TaskRepository;
use axum::Router;
use axum::routing::{get, post, put};
use tower_http::trace::TraceLayer;

/// Builds the API router.
///
/// | Method | Path                               |
/// |--------|------------------------------------|
/// | POST   | `/api/v1/tasks`                    |
/// | GET    | `/api/v1/tasks/{id}`               |
/// | PUT    | `/api/v1/tasks/{id}/extend`        |
/// | PUT    | `/api/v1/tasks/{id}/status`        |
/// | GET    | `/api/v1/users/{user_id}/tasks`    |
pub fn create_router<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + 'static,
{
    let api_v1 = Router::new()
        .route("/tasks", post(handlers::create_task::<R>))
        .route("/tasks/{id}", get(handlers::get_task::<R>))
        .route("/tasks/{id}/extend", put(handlers::extend_due_date::<R>))
        .route("/tasks/{id}/status", put(handlers::change_status::<R>))
        .route(
            "/users/{user_id}/tasks",
            get(handlers::list_user_tasks::<R>),
        );

    Router::new()
        .nest("/api/v1", api_v1)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
