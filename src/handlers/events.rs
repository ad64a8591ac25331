use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::dto::{CreatedResponse, MessageResponse};
use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, ValidatedJson};
use crate::models::event::{
    CreateEventRequest, Event, EventDetail, EventSummary, UpdateEventRequest, DEFAULT_PRIORITY,
};
use crate::services::email::escape_html;
use crate::AppState;

pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    // completed / email_sent / created_at come from column defaults
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO events (title, description, event_type, subject, event_date, event_time, priority, email_reminder)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id
        "#,
    )
    .bind(&body.title)
    .bind(&body.description)
    .bind(body.event_type)
    .bind(&body.subject)
    .bind(body.event_date)
    .bind(body.event_time)
    .bind(body.priority.unwrap_or(DEFAULT_PRIORITY))
    .bind(body.email_reminder)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(event_id = id, "Event created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Event created", id)),
    ))
}

pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<Vec<EventSummary>>> {
    let events = sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(events.into_iter().map(EventSummary::from).collect()))
}

pub async fn get_event(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
) -> AppResult<Json<EventDetail>> {
    let event = fetch_event(&state, event_id).await?;
    Ok(Json(event.into()))
}

pub async fn update_event(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
    ValidatedJson(body): ValidatedJson<UpdateEventRequest>,
) -> AppResult<Json<MessageResponse>> {
    sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE events SET
            title = COALESCE($2, title),
            completed = COALESCE($3, completed)
        WHERE id = $1
        RETURNING id
        "#,
    )
    .bind(event_id)
    .bind(&body.title)
    .bind(body.completed)
    .fetch_optional(&state.db)
    .await?
    .ok_or(AppError::NotFound("Event not found".into()))?;

    Ok(Json(MessageResponse::new("Event updated")))
}

pub async fn delete_event(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
) -> AppResult<Json<MessageResponse>> {
    let result = sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(event_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Event not found".into()));
    }

    tracing::info!(event_id, "Event deleted");
    Ok(Json(MessageResponse::new("Event deleted")))
}

/// Emails a one-off reminder for an event that opted in.
///
/// `email_sent` is claimed with a single conditional UPDATE so concurrent
/// calls send at most once; a failed delivery releases the claim.
pub async fn send_event_reminder(
    State(state): State<AppState>,
    PathParam(event_id): PathParam<i64>,
) -> AppResult<Json<MessageResponse>> {
    let (mailer, recipient) = match (&state.mailer, &state.config.reminder_recipient) {
        (Some(mailer), Some(recipient)) => (mailer, recipient),
        _ => {
            return Err(AppError::Unavailable(
                "Email reminders are not configured".into(),
            ))
        }
    };

    let claimed = sqlx::query_as::<_, Event>(
        r#"
        UPDATE events SET email_sent = true
        WHERE id = $1 AND email_reminder = true AND email_sent = false
        RETURNING *
        "#,
    )
    .bind(event_id)
    .fetch_optional(&state.db)
    .await?;

    let event = match claimed {
        Some(event) => event,
        None => {
            let existing = fetch_event(&state, event_id).await?;
            return Err(if !existing.email_reminder {
                AppError::Validation("Event does not have email reminders enabled".into())
            } else {
                AppError::Conflict("Reminder already sent".into())
            });
        }
    };

    let subject = format!("Reminder: {}", event.title);
    if let Err(e) = mailer
        .send(&subject, &render_reminder(&event), recipient)
        .await
    {
        tracing::warn!(event_id, error = %e, "Reminder delivery failed, releasing claim");
        sqlx::query("UPDATE events SET email_sent = false WHERE id = $1")
            .bind(event_id)
            .execute(&state.db)
            .await?;
        return Err(AppError::Internal(e));
    }

    tracing::info!(event_id, "Event reminder sent");
    Ok(Json(MessageResponse::new("Reminder sent")))
}

async fn fetch_event(state: &AppState, event_id: i64) -> AppResult<Event> {
    sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
        .bind(event_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))
}

fn render_reminder(event: &Event) -> String {
    let mut html = format!(
        "<h2>{}</h2><p><strong>Date:</strong> {}",
        escape_html(&event.title),
        event.event_date.format("%Y-%m-%d"),
    );
    if let Some(time) = event.event_time {
        html.push_str(&format!(" {}", time.format("%H:%M")));
    }
    html.push_str("</p>");
    if let Some(subject) = &event.subject {
        html.push_str(&format!("<p><strong>Subject:</strong> {}</p>", escape_html(subject)));
    }
    if let Some(description) = &event.description {
        html.push_str(&format!("<p>{}</p>", escape_html(description)));
    }
    html
}
