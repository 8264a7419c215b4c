//! Retention-policy description.
//!
//! Guards are evaluated top to bottom and the first that holds wins:
//! indefinite language, an explicit duration, account-lifetime language,
//! then the "not specified" default.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

pub const INDEFINITE_RETENTION: &str = "Data may be retained indefinitely. The policy uses broad \
     language about retention without clear time limits.";

pub const ACCOUNT_LIFETIME_RETENTION: &str = "Data is retained for as long as your account \
     remains active, with certain data potentially kept longer after deletion for legal and \
     security purposes.";

pub const UNSPECIFIED_RETENTION: &str =
    "The policy does not clearly specify data retention periods.";

fn case_insensitive(pattern: &str) -> Regex {
    RegexBuilder::new(pattern).case_insensitive(true).build().unwrap()
}

fn indefinite_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| case_insensitive(r"indefinite|unlimited|perpetual|forever"))
}

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| case_insensitive(r"[0-9]+\s*(?:day|month|year|week)s?"))
}

fn account_lifetime_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| case_insensitive(r"as long as.*account|while.*active"))
}

/// First "<number> <unit>" phrase in the text, e.g. `90 days`.
///
/// Only the first occurrence anywhere in the document is considered, so an
/// unrelated figure can be picked up; callers should treat it as a
/// low-confidence extraction.
pub fn first_duration(text: &str) -> Option<&str> {
    duration_regex().find(text).map(|m| m.as_str())
}

pub fn describe_retention(text: &str) -> String {
    if indefinite_regex().is_match(text) {
        return INDEFINITE_RETENTION.to_string();
    }
    if let Some(duration) = first_duration(text) {
        return format!(
            "The policy mentions retaining some data for {duration}. However, certain types of \
             data may be kept longer for legal or security reasons."
        );
    }
    if account_lifetime_regex().is_match(text) {
        return ACCOUNT_LIFETIME_RETENTION.to_string();
    }
    UNSPECIFIED_RETENTION.to_string()
}
