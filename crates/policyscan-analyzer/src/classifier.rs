//! Rule-table classification of collected data and sharing partners.

use policyscan_common::entities::{DEFAULT_DATA_COLLECTED, DEFAULT_DATA_SHARED_WITH};

use crate::rules::{data_collection_rules, data_sharing_rules, ClassificationRule};

/// Labels of every rule whose matcher succeeds, in table order, each at most
/// once. Falls back to `{default_label}` when nothing matches.
pub fn classify_with(rules: &[ClassificationRule], text: &str, default_label: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for rule in rules {
        if rule.matches(text) && !labels.iter().any(|l| l == rule.label) {
            labels.push(rule.label.to_string());
        }
    }
    if labels.is_empty() {
        labels.push(default_label.to_string());
    }
    labels
}

/// Categories of personal data the policy mentions collecting.
pub fn classify_data_collected(text: &str) -> Vec<String> {
    classify_with(data_collection_rules(), text, DEFAULT_DATA_COLLECTED)
}

/// Categories of third parties the policy mentions sharing with.
pub fn classify_data_sharing(text: &str) -> Vec<String> {
    classify_with(data_sharing_rules(), text, DEFAULT_DATA_SHARED_WITH)
}
