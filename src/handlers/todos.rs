use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::todo::Todo,
    state::AppState,
    validation::notes::{parse_id, validate_title},
};

/// The request payload for creating a todo.
#[derive(Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
}

/// The request payload for updating a todo.
#[derive(Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Lists all todos.
#[axum::debug_handler]
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Todo>> {
    Json(state.todos.list().await)
}

/// Creates a new todo.
#[axum::debug_handler]
pub async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<CreateTodoRequest>,
) -> Result<Response> {
    let title = validate_title(&req.title)?;
    let todo = state.todos.create(title).await;
    Ok((StatusCode::CREATED, Json(todo)).into_response())
}

/// Updates the todo with the given id.
#[axum::debug_handler]
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let title = validate_title(&req.title)?;

    let todo = state
        .todos
        .update(id, title, req.done)
        .await
        .ok_or(AppError::NotFound)?;

    Ok((StatusCode::OK, Json(todo)).into_response())
}

/// Deletes the todo with the given id.
#[axum::debug_handler]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;

    if !state.todos.delete(id).await {
        return Err(AppError::NotFound);
    }

    Ok(StatusCode::NO_CONTENT.into_response())
}
