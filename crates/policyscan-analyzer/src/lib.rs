//! policyscan-analyzer — Deterministic local privacy-policy analysis engine.
//!
//! Pipeline (all stages are pure functions of their inputs):
//!   normalise → classify collection / sharing → score risks
//!             → describe retention → compose summary → assemble result
//!
//! The engine never fails once content passes the minimum-length check, and
//! is the fallback whenever the upstream language-model service is
//! unavailable.

pub mod normalise;
pub mod rules;
pub mod classifier;
pub mod scorer;
pub mod retention;
pub mod summary;
pub mod identify;

use policyscan_common::{AnalysisInput, AnalysisResult, RiskLevel, Result};

pub use identify::identify_policy;
pub use normalise::{normalise_text, prepare_content, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS};

/// Validate, normalise and analyse a request with the local engine.
///
/// Returns [`policyscan_common::PolicyScanError::InputTooShort`] when the
/// normalised content has fewer than [`MIN_CONTENT_CHARS`] characters.
pub fn analyze_locally(input: &AnalysisInput) -> Result<AnalysisResult> {
    let text = prepare_content(&input.content)?;
    Ok(analyze_normalised(input.title(), input.company(), &text))
}

/// Run the engine over text that has already been normalised.
pub fn analyze_normalised(
    title: Option<&str>,
    company: Option<&str>,
    text: &str,
) -> AnalysisResult {
    let data_collected = classifier::classify_data_collected(text);
    let data_shared_with = classifier::classify_data_sharing(text);
    let risk = scorer::score_risks(text, data_collected.len(), data_shared_with.len());
    let retention_policy = retention::describe_retention(text);
    let summary = summary::compose_summary(
        company,
        title,
        &data_collected,
        &data_shared_with,
        risk.score,
    );

    tracing::debug!(
        chars = text.chars().count(),
        collected = data_collected.len(),
        shared = data_shared_with.len(),
        findings = risk.findings.len(),
        score = risk.score,
        "Local analysis complete"
    );

    AnalysisResult {
        summary,
        data_collected,
        data_shared_with,
        retention_policy,
        hidden_risks: risk.findings,
        risk_score: risk.score,
        risk_level: RiskLevel::from_score(risk.score),
    }
}
