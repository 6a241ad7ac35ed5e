use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    error::{AppError, Result},
    models::note::Note,
    models::session::Session,
    repositories::note as note_repo,
    state::AppState,
    validation::notes::{parse_id, validate_title},
};

/// The request payload for creating or updating a note.
#[derive(Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: String,
    pub content: Option<String>,
}

/// Lists the authenticated user's notes, newest first.
///
/// Always serializes an array, empty when the user has no notes.
#[axum::debug_handler]
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<Vec<Note>>> {
    let notes = note_repo::list_by_owner(&state.db, session.user_id).await?;
    Ok(Json(notes))
}

/// Creates a note owned by the authenticated user.
#[axum::debug_handler]
pub async fn create_note(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<NoteRequest>,
) -> Result<Response> {
    let title = validate_title(&req.title)?;

    let note = note_repo::create(
        &state.db,
        session.user_id,
        &title,
        req.content.as_deref(),
    )
    .await?;

    tracing::info!("✅ Note {} created for user {}", note.id, session.user_id);

    Ok((StatusCode::CREATED, Json(note)).into_response())
}

/// Updates a note owned by the authenticated user.
///
/// A note owned by someone else answers NotFound, same as a missing id.
#[axum::debug_handler]
pub async fn update_note(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(req): Json<NoteRequest>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let title = validate_title(&req.title)?;

    let affected = note_repo::update(
        &state.db,
        id,
        session.user_id,
        &title,
        req.content.as_deref(),
    )
    .await?;

    if affected == 0 {
        return Err(AppError::NotFound);
    }

    let note = Note {
        id,
        user_id: session.user_id,
        title,
        content: req.content,
    };

    Ok((StatusCode::OK, Json(note)).into_response())
}

/// Deletes a note owned by the authenticated user.
#[axum::debug_handler]
pub async fn delete_note(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;

    let affected = note_repo::delete(&state.db, id, session.user_id).await?;

    if affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!("🗑️ Note {} deleted for user {}", id, session.user_id);

    Ok(StatusCode::NO_CONTENT.into_response())
}
