//! Three-sentence plain-language summary built from extracted facts.

use policyscan_common::RiskLevel;

const DEFAULT_COMPANY: &str = "This company";
const DEFAULT_POLICY_NAME: &str = "privacy policy";

fn collection_qualifier(count: usize) -> &'static str {
    if count > 5 {
        "extensive"
    } else if count > 3 {
        "significant"
    } else {
        "moderate"
    }
}

fn collection_sentence(company: &str, policy: &str, collected: &[String]) -> String {
    let count = collected.len();
    let listed = collected
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
        .to_lowercase();
    let more = if count > 3 {
        format!(", and {} more categories", count - 3)
    } else {
        String::new()
    };
    format!(
        "{company}'s {policy} outlines {} data collection practices covering {listed}{more}.",
        collection_qualifier(count)
    )
}

fn sharing_sentence(shared: &[String]) -> String {
    let scope = if shared.len() > 3 {
        format!("at least {} categories of third parties", shared.len())
    } else {
        shared
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" and ")
            .to_lowercase()
    };
    format!("Data is shared with {scope}.")
}

fn verdict_sentence(score: u32) -> &'static str {
    match RiskLevel::from_score(score) {
        RiskLevel::High => {
            "The policy contains several concerning practices that put user privacy at significant risk."
        }
        RiskLevel::Medium => {
            "Some data practices may warrant closer attention from privacy-conscious users."
        }
        RiskLevel::Low => "Overall, the policy demonstrates reasonable data handling practices.",
    }
}

pub fn compose_summary(
    company: Option<&str>,
    title: Option<&str>,
    collected: &[String],
    shared: &[String],
    score: u32,
) -> String {
    let company = company.unwrap_or(DEFAULT_COMPANY);
    let policy = title.unwrap_or(DEFAULT_POLICY_NAME);
    [
        collection_sentence(company, policy, collected),
        sharing_sentence(shared),
        verdict_sentence(score).to_string(),
    ]
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_and_short_lists() {
        let summary = compose_summary(
            None,
            None,
            &labels(&["Email address", "IP address"]),
            &labels(&["Analytics and measurement providers"]),
            20,
        );
        assert_eq!(
            summary,
            "This company's privacy policy outlines moderate data collection practices covering \
             email address, ip address. Data is shared with analytics and measurement providers. \
             Overall, the policy demonstrates reasonable data handling practices."
        );
    }

    #[test]
    fn test_long_lists_are_condensed() {
        let collected = labels(&["A", "B", "C", "D", "E", "F", "G"]);
        let shared = labels(&["P", "Q", "R", "S"]);
        let summary = compose_summary(Some("Acme"), Some("Privacy Notice"), &collected, &shared, 75);
        assert!(summary.starts_with(
            "Acme's Privacy Notice outlines extensive data collection practices covering a, b, c, and 4 more categories."
        ));
        assert!(summary.contains("Data is shared with at least 4 categories of third parties."));
        assert!(summary.ends_with("put user privacy at significant risk."));
    }

    #[test]
    fn test_qualifier_thresholds() {
        assert_eq!(collection_qualifier(3), "moderate");
        assert_eq!(collection_qualifier(4), "significant");
        assert_eq!(collection_qualifier(5), "significant");
        assert_eq!(collection_qualifier(6), "extensive");
    }

    #[test]
    fn test_two_partners_joined_with_and() {
        let shared = labels(&["Data brokers and resellers", "Insurance companies", "Research institutions"]);
        assert_eq!(
            sharing_sentence(&shared),
            "Data is shared with data brokers and resellers and insurance companies."
        );
    }

    #[test]
    fn test_medium_verdict() {
        assert!(verdict_sentence(45).starts_with("Some data practices"));
    }
}
