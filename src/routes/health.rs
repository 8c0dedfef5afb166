//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiResponse;
use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// Liveness detail for the plain health endpoint.
#[derive(Debug, Serialize)]
pub struct LivenessStatus {
    pub status: String,
}

/// GET /api/health — liveness probe, returns OK if the process is running.
pub async fn live() -> Json<ApiResponse<LivenessStatus>> {
    ApiResponse::success(LivenessStatus {
        status: "OK".to_string(),
    })
}

/// GET /api/health/ready — readiness probe, checks database connectivity.
pub async fn ready(State(state): State<AppState>) -> Json<ApiResponse<HealthStatus>> {
    let db_status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "connected".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            format!("error: {e}")
        }
    };

    ApiResponse::success(HealthStatus {
        status: "ok".to_string(),
        database: db_status,
    })
}
