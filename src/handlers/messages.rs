use axum::{extract::State, Json};

use crate::dto::MessageResponse;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::models::message::{Message, SetMessageRequest};
use crate::AppState;

/// Replaces the active banner.
///
/// Deactivate and insert run in one transaction holding an EXCLUSIVE table
/// lock, so concurrent setters serialize instead of tripping the
/// single-active index. Readers are not blocked.
pub async fn set_message(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SetMessageRequest>,
) -> AppResult<Json<MessageResponse>> {
    let mut tx = state.db.begin().await?;

    sqlx::query("LOCK TABLE messages IN EXCLUSIVE MODE")
        .execute(&mut *tx)
        .await?;

    sqlx::query("UPDATE messages SET active = false WHERE active")
        .execute(&mut *tx)
        .await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO messages (content, active) VALUES ($1, true) RETURNING id",
    )
    .bind(&body.content)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(message_id = id, "Active message replaced");
    Ok(Json(MessageResponse::new("Message updated")))
}

/// Empty string when no banner has been set yet.
pub async fn get_message(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let active = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE active LIMIT 1")
        .fetch_optional(&state.db)
        .await?;

    Ok(Json(MessageResponse::new(
        active.map(|m| m.content).unwrap_or_default(),
    )))
}
