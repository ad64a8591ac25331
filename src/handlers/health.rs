use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    /// Latest applied migration, `None` on an unmigrated database
    pub schema_version: Option<i64>,
    pub pool_size: u32,
    pub pool_idle: usize,
}

/// Process is up; never touches the database.
pub async fn health_check() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the database answers and migrations have been recorded.
pub async fn readyz(State(state): State<AppState>) -> AppResult<Json<ReadinessResponse>> {
    let schema_version = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT MAX(version) FROM _sqlx_migrations WHERE success",
    )
    .fetch_one(&state.db)
    .await
    .map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::Unavailable("Database is not reachable".into())
    })?;

    Ok(Json(ReadinessResponse {
        status: "ready",
        schema_version,
        pool_size: state.db.size(),
        pool_idle: state.db.num_idle(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness_reports_crate_version() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_readiness_shape() {
        let json = serde_json::to_value(ReadinessResponse {
            status: "ready",
            schema_version: Some(20240501000000),
            pool_size: 2,
            pool_idle: 1,
        })
        .unwrap();
        assert_eq!(json["schema_version"], 20240501000000i64);
        assert_eq!(json["pool_idle"], 1);
    }
}
