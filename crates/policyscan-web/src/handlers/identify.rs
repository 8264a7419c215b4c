use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use policyscan_common::PolicyIdentity;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct IdentifyRequest {
    #[serde(default)]
    pub content: String,
}

/// POST /api/identify. Always answers, falling back to the unknown pair.
pub async fn identify(
    State(state): State<SharedState>,
    payload: Result<Json<IdentifyRequest>, JsonRejection>,
) -> Result<Json<PolicyIdentity>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.service.identify(&req.content).await))
}
