use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use sqlx::error::ErrorKind;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Returns the constraint-violation kind when this wraps one.
    pub fn db_error_kind(&self) -> Option<ErrorKind> {
        match self {
            AppError::Database(e) => e.as_database_error().map(|db| db.kind()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            AppError::Database(e) => match self.db_error_kind() {
                Some(ErrorKind::UniqueViolation) => {
                    tracing::warn!(error = %e, "Unique constraint violated");
                    (StatusCode::CONFLICT, "Record already exists".into())
                }
                Some(ErrorKind::ForeignKeyViolation) => {
                    tracing::warn!(error = %e, "Foreign key constraint violated");
                    (
                        StatusCode::BAD_REQUEST,
                        "Referenced record does not exist".into(),
                    )
                }
                Some(ErrorKind::NotNullViolation) | Some(ErrorKind::CheckViolation) => {
                    tracing::warn!(error = %e, "Integrity constraint violated");
                    (StatusCode::BAD_REQUEST, "Invalid record".into())
                }
                _ => {
                    tracing::error!(error = %e, "Database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".into(),
                    )
                }
            },
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
