//! End-to-end properties of the local analysis engine.
//!
//! Run with: cargo test -p policyscan-analyzer --test engine_properties

use pretty_assertions::assert_eq;

use policyscan_analyzer::retention::INDEFINITE_RETENTION;
use policyscan_analyzer::rules::RISK_PATTERNS;
use policyscan_analyzer::{analyze_locally, analyze_normalised, normalise_text};
use policyscan_common::entities::{
    DEFAULT_DATA_COLLECTED, DEFAULT_DATA_SHARED_WITH, DEFAULT_HIDDEN_RISK, MAX_RISK_SCORE,
    MIN_RISK_SCORE,
};
use policyscan_common::{AnalysisInput, AnalysisResult, RiskLevel};

const NEUTRAL_TEXT: &str =
    "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor.";

/// One clause per risk rule, in table order.
const EVERY_RISK_CLAUSE: &[&str] = &[
    "Records are kept forever.",
    "We sell your data.",
    "We run cross-platform tracking.",
    "Some third parties track you.",
    "Your location is precise.",
    "From your profile we build segments.",
    "We may change this policy without notice.",
    "We share on a broad basis.",
    "Backup copies remain.",
    "An algorithm makes each decision.",
    "We may collect more.",
    "Choosing to opt-out may limit the feature set.",
    "No child accounts.",
    "We transfer records to another country.",
    "You consent by using the site.",
    "We hold sensitive data.",
    "A facial recognition scan runs.",
    "The camera access is requested.",
];

fn assert_invariants(result: &AnalysisResult) {
    assert!(!result.data_collected.is_empty());
    assert!(!result.data_shared_with.is_empty());
    assert!(!result.hidden_risks.is_empty());
    assert!((MIN_RISK_SCORE..=MAX_RISK_SCORE).contains(&result.risk_score));
    assert_eq!(result.risk_level, RiskLevel::from_score(result.risk_score));
    assert_eq!(result.summary.matches(". ").count() + 1, 3, "{}", result.summary);
}

#[test]
fn scenario_email_phone_brokers_indefinite() {
    let input = AnalysisInput::new(
        "We collect your email and phone number. We share data with advertising partners \
         and data brokers. Data may be retained indefinitely.",
    );
    let result = analyze_locally(&input).unwrap();
    assert_invariants(&result);

    assert!(result.data_collected.contains(&"Email address".to_string()));
    assert!(result.data_collected.contains(&"Phone number and call information".to_string()));
    assert!(result.data_shared_with.contains(&"Advertising networks and ad partners".to_string()));
    assert!(result.data_shared_with.contains(&"Data brokers and resellers".to_string()));
    assert_eq!(result.retention_policy, INDEFINITE_RETENTION);

    // 2 collected + 2 shared categories, no weighted rule fires on this wording
    assert_eq!(result.risk_score, 12);
    assert_eq!(result.risk_level, RiskLevel::Low);
}

#[test]
fn numeric_retention_template() {
    let input = AnalysisInput::new("We retain data for 90 days and then remove it from our servers.");
    let result = analyze_locally(&input).unwrap();
    assert!(result.retention_policy.contains("90 days"), "{}", result.retention_policy);
    assert!(result.retention_policy.contains("legal or security reasons"));
}

#[test]
fn empty_match_fallbacks() {
    let result = analyze_locally(&AnalysisInput::new(NEUTRAL_TEXT)).unwrap();
    assert_invariants(&result);
    assert_eq!(result.data_collected, vec![DEFAULT_DATA_COLLECTED.to_string()]);
    assert_eq!(result.data_shared_with, vec![DEFAULT_DATA_SHARED_WITH.to_string()]);
    assert_eq!(result.hidden_risks, vec![DEFAULT_HIDDEN_RISK.to_string()]);
    assert_eq!(result.risk_score, MIN_RISK_SCORE);
}

#[test]
fn every_rule_plus_length_bonus_is_capped() {
    let clauses = EVERY_RISK_CLAUSE.join(" ");
    let padding = "lorem ".repeat(4_000);
    let text = format!("{clauses} {padding}");
    assert!(text.chars().count() > 20_000);

    let result = analyze_normalised(None, None, &text);
    assert_invariants(&result);
    assert_eq!(result.hidden_risks.len(), RISK_PATTERNS.len());
    for (_, finding, _) in RISK_PATTERNS {
        assert!(result.hidden_risks.contains(&finding.to_string()), "missing {finding}");
    }
    assert_eq!(result.risk_score, MAX_RISK_SCORE);
    assert_eq!(result.risk_level, RiskLevel::High);
}

#[test]
fn findings_follow_table_order() {
    let text = EVERY_RISK_CLAUSE.iter().rev().cloned().collect::<Vec<_>>().join(" ");
    let result = analyze_normalised(None, None, &text);
    let expected: Vec<String> = RISK_PATTERNS.iter().map(|(_, f, _)| f.to_string()).collect();
    assert_eq!(result.hidden_risks, expected);
}

#[test]
fn identical_input_gives_identical_output() {
    let input = AnalysisInput::new(EVERY_RISK_CLAUSE.join(" "))
        .with_title("Privacy Notice")
        .with_company("Acme");
    let first = analyze_locally(&input).unwrap();
    let second = analyze_locally(&input).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn adding_signals_never_lowers_the_score() {
    let mut text = NEUTRAL_TEXT.to_string();
    let mut previous = analyze_normalised(None, None, &text).risk_score;
    for clause in EVERY_RISK_CLAUSE {
        text.push(' ');
        text.push_str(clause);
        let score = analyze_normalised(None, None, &text).risk_score;
        assert!(score >= previous, "score dropped from {previous} to {score} after {clause:?}");
        previous = score;
    }
}

#[test]
fn length_boundary_after_normalisation() {
    let body_49 = "z".repeat(49);
    let body_50 = "z".repeat(50);
    assert!(analyze_locally(&AnalysisInput::new(format!("<p>{body_49}</p>\n"))).is_err());
    assert!(analyze_locally(&AnalysisInput::new(format!("<p>{body_50}</p>\n"))).is_ok());
    assert_eq!(normalise_text(&format!("  {body_50}  ")), body_50);
}

#[test]
fn summary_mentions_company_and_title() {
    let input = AnalysisInput::new(NEUTRAL_TEXT).with_company("Acme").with_title("Privacy Notice");
    let result = analyze_locally(&input).unwrap();
    assert!(result.summary.starts_with("Acme's Privacy Notice outlines moderate"));
}
