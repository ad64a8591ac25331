use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Daily banner. At most one row is `active`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub active: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetMessageRequest {
    #[validate(
        required(message = "is required"),
        length(min = 1, message = "must not be empty")
    )]
    pub content: Option<String>,
}
