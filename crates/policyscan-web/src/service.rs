//! Request orchestration: upstream first when configured, local engine
//! otherwise. Exactly one of the two produces each returned result.

use std::sync::Arc;

use policyscan_analyzer::identify::identification_window;
use policyscan_analyzer::{analyze_normalised, identify_policy, prepare_content};
use policyscan_common::{AnalysisInput, AnalysisResult, HistoryEntry, PolicyIdentity, Result};
use policyscan_db::HistoryStore;
use policyscan_llm::UpstreamClient;

pub struct AnalysisService {
    upstream: Option<UpstreamClient>,
    history: Arc<dyn HistoryStore>,
}

impl AnalysisService {
    pub fn new(upstream: Option<UpstreamClient>, history: Arc<dyn HistoryStore>) -> Self {
        Self { upstream, history }
    }

    pub fn upstream_configured(&self) -> bool {
        self.upstream.is_some()
    }

    pub fn history(&self) -> &Arc<dyn HistoryStore> {
        &self.history
    }

    /// Validate, analyse and record one policy.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        let text = prepare_content(&input.content)?;
        let (title, company) = (input.title(), input.company());

        let result = match &self.upstream {
            Some(upstream) => match upstream.analyze(title, company, &text).await {
                Ok(result) => {
                    tracing::info!(path = "upstream", score = result.risk_score, "Policy analysed");
                    result
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Upstream analysis unavailable, using local engine");
                    self.analyze_locally(title, company, &text)
                }
            },
            None => self.analyze_locally(title, company, &text),
        };

        let entry = HistoryEntry::from_result(
            title.unwrap_or(PolicyIdentity::DEFAULT_TITLE),
            company.unwrap_or(PolicyIdentity::UNKNOWN_COMPANY),
            result.clone(),
        );
        // A failed history write must not lose the analysis itself.
        match self.history.append(entry).await {
            Ok(()) => tracing::debug!(backend = self.history.backend_name(), "History entry appended"),
            Err(e) => tracing::warn!(error = %e, "Could not record analysis in history"),
        }

        Ok(result)
    }

    fn analyze_locally(&self, title: Option<&str>, company: Option<&str>, text: &str) -> AnalysisResult {
        let result = analyze_normalised(title, company, text);
        tracing::info!(path = "local", score = result.risk_score, "Policy analysed");
        result
    }

    /// Guess company and title. Never fails.
    pub async fn identify(&self, content: &str) -> PolicyIdentity {
        if let Some(upstream) = &self.upstream {
            let window = identification_window(content);
            match upstream.identify(&window).await {
                Ok(identity) => {
                    tracing::info!(path = "upstream", "Policy identified");
                    return identity;
                }
                Err(e) => tracing::warn!(error = %e, "Upstream identification unavailable, using heuristic"),
            }
        }
        let identity = identify_policy(content);
        tracing::info!(path = "local", known = identity.company != PolicyIdentity::UNKNOWN_COMPANY, "Policy identified");
        identity
    }
}
