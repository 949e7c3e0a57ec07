//! JSON handlers for todos.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use quicktodo_app::ports::TodoRepository;
use quicktodo_domain::id::TodoId;
use quicktodo_domain::todo::{Todo, TodoDraft};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a todo.
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub completed: Option<bool>,
}

/// Request body for replacing a todo. Both fields are required.
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub completed: bool,
}

/// `{"message": "..."}` payload used for confirmations.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Todo>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum TodoResponse {
    Ok(Json<Todo>),
}

impl IntoResponse for TodoResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted(Json<MessageBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted(json) => json.into_response(),
        }
    }
}

fn parse_id(raw: &str) -> Result<TodoId, ApiError> {
    Ok(raw.parse::<TodoId>()?)
}

/// `GET /todos`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todos = state.todo_service.list_todos().await?;
    Ok(ListResponse::Ok(Json(todos)))
}

/// `GET /todos/{id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<TodoResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let todo = state.todo_service.get_todo(parse_id(&id)?).await?;
    Ok(TodoResponse::Ok(Json(todo)))
}

/// `POST /todos`
///
/// Answers `200 OK` (not `201`) with the stored record, id included.
pub async fn create<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<TodoResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;

    let mut builder = TodoDraft::builder().title(req.title);
    if let Some(completed) = req.completed {
        builder = builder.completed(completed);
    }

    let draft = builder.build()?;
    let created = state.todo_service.create_todo(draft).await?;
    Ok(TodoResponse::Ok(Json(created)))
}

/// `PUT /todos/{id}`
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<TodoResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let Json(req) = payload?;

    let draft = TodoDraft::builder()
        .title(req.title)
        .completed(req.completed)
        .build()?;
    let updated = state.todo_service.update_todo(id, draft).await?;
    Ok(TodoResponse::Ok(Json(updated)))
}

/// `DELETE /todos/{id}`
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    R: TodoRepository + Send + Sync + 'static,
{
    let removed = state.todo_service.delete_todo(parse_id(&id)?).await?;
    Ok(DeleteResponse::Deleted(Json(MessageBody {
        message: format!("Todo '{}' deleted successfully", removed.title),
    })))
}
