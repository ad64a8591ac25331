use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::dto::{CreatedResponse, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::models::note::{CreateNoteRequest, Note, NoteSummary};
use crate::AppState;

pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateNoteRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let id = sqlx::query_scalar::<_, i64>("INSERT INTO notes (content) VALUES ($1) RETURNING id")
        .bind(&body.content)
        .fetch_one(&state.db)
        .await?;

    tracing::info!(note_id = id, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Note created", id)),
    ))
}

/// Newest first; id breaks ties between notes created in the same instant.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<Json<Vec<NoteSummary>>> {
    let notes = sqlx::query_as::<_, Note>(
        "SELECT * FROM notes ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&state.db)
    .await?;

    Ok(Json(notes.into_iter().map(NoteSummary::from).collect()))
}

pub async fn delete_note(
    State(state): State<AppState>,
    PathParam(note_id): PathParam<i64>,
) -> AppResult<Json<MessageResponse>> {
    let result = sqlx::query("DELETE FROM notes WHERE id = $1")
        .bind(note_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Note not found".into()));
    }

    tracing::info!(note_id, "Note deleted");
    Ok(Json(MessageResponse::new("Note deleted")))
}
