use axum::{extract::rejection::JsonRejection, extract::State, Json};

use policyscan_common::{AnalysisInput, AnalysisResult};

use crate::error::ApiError;
use crate::state::SharedState;

/// POST /api/analyze
pub async fn analyze(
    State(state): State<SharedState>,
    payload: Result<Json<AnalysisInput>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(input) = payload?;
    tracing::debug!(chars = input.content.chars().count(), "Analysis requested");
    let result = state.service.analyze(&input).await?;
    Ok(Json(result))
}
