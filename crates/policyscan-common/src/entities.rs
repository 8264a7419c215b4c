//! Value types exchanged between the analyzer, the upstream collaborator,
//! the history store and the HTTP layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filler used when no data-collection rule matches.
pub const DEFAULT_DATA_COLLECTED: &str = "General personal information";
/// Filler used when no sharing rule matches.
pub const DEFAULT_DATA_SHARED_WITH: &str = "Third-party service providers";
/// Filler used when no risk rule matches.
pub const DEFAULT_HIDDEN_RISK: &str =
    "Insufficient transparency about specific data handling practices";

/// Lowest score any result may carry.
pub const MIN_RISK_SCORE: u32 = 10;
/// Highest score any result may carry.
pub const MAX_RISK_SCORE: u32 = 98;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl AnalysisInput {
    pub fn new(content: impl Into<String>) -> Self {
        Self { title: None, company: None, content: content.into() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Title with blank values treated as absent.
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Company with blank values treated as absent.
    pub fn company(&self) -> Option<&str> {
        non_blank(self.company.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Risk level
// ---------------------------------------------------------------------------

/// Three-tier label derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// score <= 30 → Low, 31..=60 → Medium, > 60 → High.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=30 => RiskLevel::Low,
            31..=60 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low    => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High   => "High",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub data_collected: Vec<String>,
    pub data_shared_with: Vec<String>,
    pub retention_policy: String,
    pub hidden_risks: Vec<String>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

impl AnalysisResult {
    /// Bring an externally produced result in line with the local invariants:
    /// non-empty lists, score in [10, 98] and a level derived from the score.
    pub fn into_consistent(mut self) -> Self {
        fill_if_empty(&mut self.data_collected, DEFAULT_DATA_COLLECTED);
        fill_if_empty(&mut self.data_shared_with, DEFAULT_DATA_SHARED_WITH);
        fill_if_empty(&mut self.hidden_risks, DEFAULT_HIDDEN_RISK);
        self.risk_score = self.risk_score.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE);
        self.risk_level = RiskLevel::from_score(self.risk_score);
        self
    }
}

fn fill_if_empty(items: &mut Vec<String>, filler: &str) {
    items.retain(|item| !item.trim().is_empty());
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
    if items.is_empty() {
        items.push(filler.to_string());
    }
}

// ---------------------------------------------------------------------------
// Identification
// ---------------------------------------------------------------------------

/// Best-effort guess of who published a policy and what it is called.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyIdentity {
    pub company: String,
    pub title: String,
}

impl PolicyIdentity {
    pub const UNKNOWN_COMPANY: &'static str = "Unknown Company";
    pub const DEFAULT_TITLE: &'static str = "Privacy Policy";
}

impl Default for PolicyIdentity {
    fn default() -> Self {
        Self {
            company: Self::UNKNOWN_COMPANY.to_string(),
            title: Self::DEFAULT_TITLE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// One stored analysis. Never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub date: DateTime<Utc>,
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub result: AnalysisResult,
}

impl HistoryEntry {
    pub fn from_result(
        title: impl Into<String>,
        company: impl Into<String>,
        result: AnalysisResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            company: company.into(),
            date: Utc::now(),
            risk_score: result.risk_score,
            risk_level: result.risk_level,
            result,
        }
    }
}
