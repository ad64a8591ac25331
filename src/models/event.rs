use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

pub const DEFAULT_PRIORITY: i32 = 2;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub subject: Option<String>,
    pub event_date: NaiveDate,
    pub event_time: Option<NaiveTime>,
    pub priority: i32,
    pub email_reminder: bool,
    pub email_sent: bool,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "event_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Exam,
    Task,
    Reminder,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, max = 120, message = "must be 1-120 characters")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    pub event_type: Option<EventType>,

    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub subject: Option<String>,

    /// Calendar date, `YYYY-MM-DD`
    #[validate(required(message = "is required"))]
    pub event_date: Option<NaiveDate>,

    /// Wall-clock time, `HH:MM:SS`
    pub event_time: Option<NaiveTime>,

    /// Default: 2
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub priority: Option<i32>,

    #[serde(default)]
    pub email_reminder: bool,
}

/// PUT /events/{id}. Only the title and completion flag are mutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 120, message = "must be 1-120 characters"))]
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Row shape for GET /events
#[derive(Debug, Serialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub completed: bool,
}

impl From<Event> for EventSummary {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            date: event.event_date,
            completed: event.completed,
        }
    }
}

/// Body of GET /events/{id}
#[derive(Debug, Serialize)]
pub struct EventDetail {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub completed: bool,
}

impl From<Event> for EventDetail {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.event_date,
            completed: event.completed,
        }
    }
}
