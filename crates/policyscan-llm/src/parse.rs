//! Interpretation of raw upstream text.
//!
//! Upstream output is untrusted: it may be wrapped in code fences, miss
//! fields, or carry a score outside the published range. Everything that
//! leaves this module satisfies the same invariants as a locally produced
//! result.

use serde::Deserialize;

use policyscan_common::{AnalysisResult, PolicyIdentity, RiskLevel};

use crate::backend::LlmError;

/// Remove a leading ```` ```json ```` / ```` ``` ```` fence and a trailing
/// ```` ``` ```` fence, then trim.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

#[derive(Debug, Deserialize)]
struct UpstreamAnalysis {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    data_collected: Vec<String>,
    #[serde(default)]
    data_shared_with: Vec<String>,
    #[serde(default)]
    retention_policy: String,
    #[serde(default)]
    hidden_risks: Vec<String>,
    #[serde(default)]
    risk_score: f64,
}

#[derive(Debug, Deserialize)]
struct UpstreamIdentity {
    #[serde(default)]
    company: String,
    #[serde(default)]
    title: String,
}

fn malformed(e: serde_json::Error) -> LlmError {
    LlmError::Malformed(e.to_string())
}

/// Parse an analysis reply. Score and level are re-derived; the level the
/// upstream reported is ignored.
pub fn parse_analysis(raw: &str) -> Result<AnalysisResult, LlmError> {
    let parsed: UpstreamAnalysis = serde_json::from_str(strip_code_fences(raw)).map_err(malformed)?;

    if parsed.summary.trim().is_empty() {
        return Err(LlmError::Malformed("summary is blank".to_string()));
    }
    if parsed.retention_policy.trim().is_empty() {
        return Err(LlmError::Malformed("retention_policy is blank".to_string()));
    }
    if !parsed.risk_score.is_finite() {
        return Err(LlmError::Malformed("risk_score is not a number".to_string()));
    }

    let score = parsed.risk_score.round().clamp(0.0, 100.0) as u32;
    Ok(AnalysisResult {
        summary: parsed.summary.trim().to_string(),
        data_collected: parsed.data_collected,
        data_shared_with: parsed.data_shared_with,
        retention_policy: parsed.retention_policy.trim().to_string(),
        hidden_risks: parsed.hidden_risks,
        risk_score: score,
        risk_level: RiskLevel::from_score(score),
    }
    .into_consistent())
}

/// Parse an identification reply. A blank company is treated as no answer.
pub fn parse_identity(raw: &str) -> Result<PolicyIdentity, LlmError> {
    let parsed: UpstreamIdentity = serde_json::from_str(strip_code_fences(raw)).map_err(malformed)?;
    let company = parsed.company.trim();
    if company.is_empty() {
        return Err(LlmError::Malformed("company is blank".to_string()));
    }
    let title = match parsed.title.trim() {
        "" => PolicyIdentity::DEFAULT_TITLE,
        t => t,
    };
    Ok(PolicyIdentity { company: company.to_string(), title: title.to_string() })
}
