use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health/ready - database readiness probe
///
/// Dependency failure is reported, not raised: 503 tells the orchestrator the process is up
/// but cannot serve traffic yet.
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "not ready" })),
            )
        }
    }
}

/// GET /api/health/live - process liveness, no dependencies
pub async fn live() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
