//! Shared application state for the web server.

use std::sync::Arc;

use policyscan_common::PolicyScanError;
use policyscan_db::{HistoryStore, JsonFileHistoryStore, MemoryHistoryStore};
use policyscan_llm::{GeminiBackend, LlmBackend, UpstreamClient};

use crate::config::Config;
use crate::service::AnalysisService;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub service: AnalysisService,
}

impl AppState {
    pub fn new(service: AnalysisService) -> Self {
        Self { service }
    }

    /// Wire up the upstream client and history backend described by `config`.
    pub fn from_config(config: &Config) -> Result<Self, PolicyScanError> {
        let history: Arc<dyn HistoryStore> = match &config.history.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Using file-backed history");
                Arc::new(JsonFileHistoryStore::new(path, config.history.max_entries))
            }
            None => Arc::new(MemoryHistoryStore::new(config.history.max_entries)),
        };

        let upstream = if !config.llm.enabled {
            tracing::info!("Upstream analysis disabled by configuration");
            None
        } else {
            match config.llm.resolve_api_key(|name| std::env::var(name).ok()) {
                Some(key) => {
                    let backend = GeminiBackend::new(key, &config.llm.model, config.llm.request_timeout())
                        .map_err(|e| PolicyScanError::Config(format!("upstream client: {e}")))?;
                    Some(Self::upstream_client(Arc::new(backend), config))
                }
                None => {
                    tracing::info!("No upstream API key configured, local engine only");
                    None
                }
            }
        };

        Ok(Self::new(AnalysisService::new(upstream, history)))
    }

    pub fn upstream_client(backend: Arc<dyn LlmBackend>, config: &Config) -> UpstreamClient {
        UpstreamClient::new(backend)
            .with_retry_policies(config.llm.analyze_retry(), config.llm.identify_retry())
            .with_settings(config.llm.generation())
    }
}

pub type SharedState = Arc<AppState>;
