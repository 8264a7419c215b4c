//! Axum router mapping URL paths to handlers.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::handlers::{
    analyze::analyze,
    documents::parse_document,
    health::health,
    history::{clear_history, list_history},
    identify::identify,
};
use crate::state::{AppState, SharedState};

/// Upper bound on any request body, uploads included.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        .route("/health",             get(health))
        .route("/api/analyze",        post(analyze))
        .route("/api/identify",       post(identify))
        .route("/api/parse-document", post(parse_document))
        .route("/api/history",        get(list_history).delete(clear_history))

        // Middleware
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
