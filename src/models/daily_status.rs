use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyStatus {
    pub id: i64,
    pub date: NaiveDate,
    pub mood: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetDailyStatusRequest {
    #[validate(required(message = "is required"))]
    pub date: Option<NaiveDate>,

    /// Free text, e.g. "tired", "normal", "motivated"
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub mood: Option<String>,

    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DailyStatusEntry {
    pub date: NaiveDate,
    pub mood: Option<String>,
    pub note: Option<String>,
}

impl From<DailyStatus> for DailyStatusEntry {
    fn from(status: DailyStatus) -> Self {
        Self {
            date: status.date,
            mood: status.mood,
            note: status.note,
        }
    }
}
