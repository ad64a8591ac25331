//! Response envelopes shared by every resource.
//!
//! Resource-specific request and response shapes live next to their rows in
//! `models::*`.

use serde::Serialize;

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Success message plus the id of the row that was created
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id,
        }
    }
}

/// Bare id, returned where the caller only needs the new key
#[derive(Debug, Serialize)]
pub struct IdResponse {
    pub id: i64,
}
