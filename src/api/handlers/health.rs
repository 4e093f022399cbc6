use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;

/// Basic health check response
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Database readiness response
#[derive(serde::Serialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub service: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
/// Basic health check endpoint (no database check)
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "submission-docs",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}

/// GET /health/ready
/// Readiness probe with database connectivity check
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    )
)]
pub async fn readiness_handler(
    State(pool): State<Arc<PgPool>>,
) -> (StatusCode, Json<serde_json::Value>) {
    let db_check = tokio::time::timeout(
        std::time::Duration::from_secs(2),
        sqlx::query("SELECT 1 as health_check").fetch_one(pool.as_ref()),
    )
    .await;

    match db_check {
        Ok(Ok(_)) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "service": "submission-docs",
                "database": "connected",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        ),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "submission-docs",
                "database": "disconnected",
                "error": e.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "service": "submission-docs",
                "database": "timeout",
                "error": "Database query timed out after 2 seconds",
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        ),
    }
}
