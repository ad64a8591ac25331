use axum::{extract::State, http::StatusCode, Json};

use crate::dto::MessageResponse;
use crate::error::AppResult;
use crate::extract::ValidatedJson;
use crate::models::daily_status::{DailyStatus, DailyStatusEntry, SetDailyStatusRequest};
use crate::AppState;

/// One row per date: a repeat call for the same date replaces mood and note
/// wholesale, including clearing them when omitted.
pub async fn set_daily_status(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<SetDailyStatusRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    sqlx::query(
        r#"
        INSERT INTO daily_statuses (date, mood, note)
        VALUES ($1, $2, $3)
        ON CONFLICT (date) DO UPDATE SET
            mood = EXCLUDED.mood,
            note = EXCLUDED.note
        "#,
    )
    .bind(body.date)
    .bind(&body.mood)
    .bind(&body.note)
    .execute(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new("Status saved"))))
}

pub async fn list_daily_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<DailyStatusEntry>>> {
    let statuses =
        sqlx::query_as::<_, DailyStatus>("SELECT * FROM daily_statuses ORDER BY date DESC")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(statuses.into_iter().map(DailyStatusEntry::from).collect()))
}
