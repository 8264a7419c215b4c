//! Upstream client: one backend, one retry schedule per task.

use std::sync::Arc;
use std::time::Instant;

use policyscan_common::{AnalysisResult, PolicyIdentity};

use crate::audit::LlmAuditEntry;
use crate::backend::{LlmBackend, LlmError, LlmRequest, LlmResponse};
use crate::parse::{parse_analysis, parse_identity};
use crate::prompt::{analysis_request, identify_request};
use crate::retry::{RetryOutcome, RetryPolicy};

pub use crate::prompt::GenerationSettings;

pub struct UpstreamClient {
    backend: Arc<dyn LlmBackend>,
    analyze_retry: RetryPolicy,
    identify_retry: RetryPolicy,
    settings: GenerationSettings,
}

impl UpstreamClient {
    pub fn new(backend: Arc<dyn LlmBackend>) -> Self {
        Self {
            backend,
            analyze_retry: RetryPolicy::from_millis(&[0, 3_000, 8_000]),
            identify_retry: RetryPolicy::from_millis(&[0, 2_000, 5_000]),
            settings: GenerationSettings::default(),
        }
    }

    pub fn with_retry_policies(mut self, analyze: RetryPolicy, identify: RetryPolicy) -> Self {
        self.analyze_retry = analyze;
        self.identify_retry = identify;
        self
    }

    pub fn with_settings(mut self, settings: GenerationSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn model_id(&self) -> &str {
        self.backend.model_id()
    }

    /// Analyse normalised policy text upstream.
    pub async fn analyze(
        &self,
        title: Option<&str>,
        company: Option<&str>,
        text: &str,
    ) -> Result<AnalysisResult, LlmError> {
        let req = analysis_request(title, company, text, &self.settings);
        let response = self.call("analyze", &self.analyze_retry, req).await?;
        parse_analysis(&response.content)
    }

    /// Ask upstream who published the policy and what it is called.
    pub async fn identify(&self, text: &str) -> Result<PolicyIdentity, LlmError> {
        let req = identify_request(text);
        let response = self.call("identify", &self.identify_retry, req).await?;
        parse_identity(&response.content)
    }

    async fn call(
        &self,
        operation: &str,
        policy: &RetryPolicy,
        req: LlmRequest,
    ) -> Result<LlmResponse, LlmError> {
        let started = Instant::now();
        let outcome = policy
            .run(|attempt| {
                let backend = Arc::clone(&self.backend);
                let req = req.clone();
                tracing::debug!(operation, attempt, model = backend.model_id(), "Upstream attempt");
                async move { backend.complete(req).await }
            })
            .await;

        match outcome {
            RetryOutcome::Succeeded { value, attempts } => {
                let latency_ms = started.elapsed().as_millis() as u64;
                LlmAuditEntry::new(operation, &value, attempts, latency_ms).emit();
                Ok(value)
            }
            RetryOutcome::FallbackRequired { attempts, error } => {
                tracing::warn!(operation, attempts, error = %error, "Upstream gave up");
                Err(error)
            }
        }
    }
}
