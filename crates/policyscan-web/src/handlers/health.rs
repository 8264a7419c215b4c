use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub upstream_configured: bool,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok", upstream_configured: state.service.upstream_configured() })
}
