//! policyscan-common — Shared types and errors used across all policyscan crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{AnalysisInput, AnalysisResult, HistoryEntry, PolicyIdentity, RiskLevel};
pub use error::{PolicyScanError, Result};
