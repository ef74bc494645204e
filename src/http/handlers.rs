//! Request handlers for the task endpoints.

use super::dto::{
    ChangeStatusBody, CreateTaskBody, CreateTaskResponse, ExtendDueDateBody, SuccessResponse,
    TaskResponse,
};
use super::{ApiError, AppState};
use crate::task::{
    domain::{TaskId, TaskStatus},
    ports::TaskRepository,
    services::CreateTaskRequest,
};
use crate::user::domain::UserId;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::bad_request("invalid_body", rejection.body_text()))
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(raw)| raw)
        .map_err(|rejection| ApiError::bad_request("invalid_path", rejection.body_text()))
}

/// Resolves the target task from the path, rejecting a conflicting body id.
fn target_task(path: i64, body_id: Option<TaskId>) -> ApiResult<TaskId> {
    let id = TaskId::new(path);
    match body_id {
        Some(other) if other != id => Err(ApiError::bad_request(
            "id_mismatch",
            format!("body id {other} does not match path id {id}"),
        )),
        _ => Ok(id),
    }
}

/// `POST /api/v1/tasks`
///
/// # Errors
///
/// Returns `400` for a malformed body and `500` when the service fails.
pub async fn create_task<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<CreateTaskBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CreateTaskResponse>)>
where
    R: TaskRepository + 'static,
{
    let payload = json_body(body)?;
    let mut request = CreateTaskRequest::new(payload.name, payload.user_id, payload.due_date);
    if let Some(delay_count) = payload.delay_count {
        request = request.with_delay_count(delay_count);
    }

    let task_id = state.tasks().create_task(request).await?;
    Ok((StatusCode::CREATED, Json(CreateTaskResponse { task_id })))
}

/// `GET /api/v1/tasks/{id}`
///
/// # Errors
///
/// Returns `400` for a non-numeric id and `500` when the task is missing or
/// the store fails.
pub async fn get_task<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<TaskResponse>>
where
    R: TaskRepository + 'static,
{
    let id = TaskId::new(path_id(path)?);
    let task = state.tasks().find_task(id).await?;
    Ok(Json(TaskResponse::from(&task)))
}

/// `PUT /api/v1/tasks/{id}/extend`
///
/// # Errors
///
/// Returns `400` for a malformed request and `500` when the service fails.
pub async fn extend_due_date<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ExtendDueDateBody>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>>
where
    R: TaskRepository + 'static,
{
    let raw_id = path_id(path)?;
    let payload = json_body(body)?;
    let id = target_task(raw_id, payload.id)?;

    state.tasks().extend_due_date(id, payload.due_date).await?;
    Ok(Json(SuccessResponse::success()))
}

/// `PUT /api/v1/tasks/{id}/status`
///
/// # Errors
///
/// Returns `400` for a malformed request or unknown status and `500` when
/// the service fails.
pub async fn change_status<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<ChangeStatusBody>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>>
where
    R: TaskRepository + 'static,
{
    let raw_id = path_id(path)?;
    let payload = json_body(body)?;
    let id = target_task(raw_id, payload.id)?;
    let new_status = TaskStatus::try_from(payload.new_status.as_str())
        .map_err(|err| ApiError::bad_request("invalid_status", err.to_string()))?;

    state.tasks().change_status(id, new_status).await?;
    Ok(Json(SuccessResponse::success()))
}

/// `GET /api/v1/users/{user_id}/tasks`
///
/// # Errors
///
/// Returns `400` for a non-numeric id and `500` when the store fails.
pub async fn list_user_tasks<R>(
    State(state): State<AppState<R>>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Vec<TaskResponse>>>
where
    R: TaskRepository + 'static,
{
    let owner_id = UserId::new(path_id(path)?);
    let tasks = state.tasks().tasks_for_owner(owner_id).await?;
    Ok(Json(tasks.iter().map(TaskResponse::from).collect()))
}
