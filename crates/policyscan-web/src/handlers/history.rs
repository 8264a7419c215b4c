use axum::{extract::State, http::StatusCode, Json};

use policyscan_common::HistoryEntry;

use crate::error::ApiError;
use crate::state::SharedState;

/// GET /api/history, newest first.
pub async fn list_history(
    State(state): State<SharedState>,
) -> Result<Json<Vec<HistoryEntry>>, ApiError> {
    Ok(Json(state.service.history().list().await?))
}

/// DELETE /api/history
pub async fn clear_history(State(state): State<SharedState>) -> Result<StatusCode, ApiError> {
    state.service.history().clear().await?;
    tracing::info!("History cleared");
    Ok(StatusCode::NO_CONTENT)
}
