//! Risk finding detection and score computation.
//!
//! score = clamp(base + Σ matched rule weights + length bonus, 10, 98)
//! base  = min(3 × |collected|, 25) + min(3 × |shared|, 20)
//!
//! Every term is non-decreasing in the evidence found, so adding matchable
//! text never lowers the score.

use policyscan_common::entities::{DEFAULT_HIDDEN_RISK, MAX_RISK_SCORE, MIN_RISK_SCORE};

use crate::rules::{risk_rules, WeightedRiskRule};

const POINTS_PER_CATEGORY: u32 = 3;
const COLLECTED_CAP: u32 = 25;
const SHARED_CAP: u32 = 20;

/// (length threshold in chars, bonus points). Each exceeded threshold adds.
const LENGTH_BONUSES: [(usize, u32); 2] = [(10_000, 5), (20_000, 5)];

/// Findings and the pieces the final score was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskAssessment {
    pub findings: Vec<String>,
    pub base_points: u32,
    pub rule_points: u32,
    pub length_bonus: u32,
    /// Clamped final score in [10, 98].
    pub score: u32,
}

/// Volume-based points from the collection and sharing category counts.
pub fn base_points(collected: usize, shared: usize) -> u32 {
    let collected = (collected as u32).saturating_mul(POINTS_PER_CATEGORY).min(COLLECTED_CAP);
    let shared = (shared as u32).saturating_mul(POINTS_PER_CATEGORY).min(SHARED_CAP);
    collected + shared
}

/// Bonus for long documents, measured in characters of normalised text.
pub fn length_bonus(text_chars: usize) -> u32 {
    LENGTH_BONUSES
        .iter()
        .filter(|(threshold, _)| text_chars > *threshold)
        .map(|(_, bonus)| bonus)
        .sum()
}

/// Clamp a raw point total into the published score range.
pub fn clamp_score(raw: u32) -> u32 {
    raw.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE)
}

pub fn score_with(
    rules: &[WeightedRiskRule],
    text: &str,
    collected: usize,
    shared: usize,
) -> RiskAssessment {
    let base = base_points(collected, shared);

    let mut findings: Vec<String> = Vec::new();
    let mut rule_points = 0u32;
    for rule in rules {
        if rule.matches(text) {
            if !findings.iter().any(|f| f == rule.finding) {
                findings.push(rule.finding.to_string());
            }
            rule_points += rule.weight;
        }
    }

    let bonus = length_bonus(text.chars().count());
    let score = clamp_score(base + rule_points + bonus);

    if findings.is_empty() {
        findings.push(DEFAULT_HIDDEN_RISK.to_string());
    }

    RiskAssessment { findings, base_points: base, rule_points, length_bonus: bonus, score }
}

/// Score `text` against the built-in risk table.
pub fn score_risks(text: &str, collected: usize, shared: usize) -> RiskAssessment {
    score_with(risk_rules(), text, collected, shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points_are_capped() {
        assert_eq!(base_points(0, 0), 0);
        assert_eq!(base_points(2, 1), 9);
        assert_eq!(base_points(8, 6), 24 + 18);
        assert_eq!(base_points(9, 7), 25 + 20);
        assert_eq!(base_points(25, 15), 45);
    }

    #[test]
    fn test_length_bonus_thresholds() {
        assert_eq!(length_bonus(10_000), 0);
        assert_eq!(length_bonus(10_001), 5);
        assert_eq!(length_bonus(20_000), 5);
        assert_eq!(length_bonus(20_001), 10);
    }

    #[test]
    fn test_score_floor_applies() {
        let text = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod.";
        let risk = score_risks(text, 1, 1);
        assert_eq!(risk.rule_points, 0);
        assert_eq!(risk.score, MIN_RISK_SCORE);
        assert_eq!(risk.findings, vec![DEFAULT_HIDDEN_RISK.to_string()]);
    }

    #[test]
    fn test_rule_weights_accumulate() {
        let text = "We may sell your information. Children under 13 are not targeted.";
        let risk = score_risks(text, 0, 0);
        assert!(risk.findings.contains(&"Your data may be sold or commercially monetized".to_string()));
        assert!(risk.findings.contains(&"Potential exposure risks to children's data".to_string()));
        assert_eq!(risk.rule_points, 15 + 5);
        assert_eq!(risk.score, 20);
    }

    #[test]
    fn test_ceiling_applies() {
        let risk = score_risks("", 25, 15);
        assert_eq!(risk.base_points, 45);
        let maxed = clamp_score(45 + 162 + 10);
        assert_eq!(maxed, MAX_RISK_SCORE);
    }
}
