//! Company / policy-title detection heuristic.
//!
//! Best effort only. Looks at the head of the document for either a
//! "<Name> Privacy Policy" phrase or a copyright line, and otherwise reports
//! the unknown pair.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use policyscan_common::PolicyIdentity;

use crate::normalise::{collapse_whitespace, truncate_chars};

/// Only the head of a document is inspected.
pub const IDENTIFY_WINDOW_CHARS: usize = 3_000;

fn titled_policy_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new(
            r"([A-Z][a-z0-9\s]+(?:Inc\.|LLC|Ltd\.|Corporation|Company)?)\s+(?:Privacy|Data)\s+Policy",
        )
        .case_insensitive(true)
        .build()
        .unwrap()
    })
}

fn copyright_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"©\s*(?:20[0-9][0-9])?\s*([A-Za-z0-9\s.,]+)").unwrap())
}

fn rights_reserved_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        RegexBuilder::new("All rights reserved").case_insensitive(true).build().unwrap()
    })
}

/// Text window the heuristic runs over: first 3,000 characters with
/// whitespace collapsed.
pub fn identification_window(raw: &str) -> String {
    collapse_whitespace(truncate_chars(raw, IDENTIFY_WINDOW_CHARS))
}

/// Guess the publishing company and policy title. Never fails.
pub fn identify_policy(raw: &str) -> PolicyIdentity {
    let text = identification_window(raw);

    if let Some(caps) = titled_policy_regex().captures(&text) {
        let company = caps[1].trim().to_string();
        if !company.is_empty() {
            let title = format!("{company} Privacy Policy");
            return PolicyIdentity { company, title };
        }
    }

    if let Some(caps) = copyright_regex().captures(&text) {
        let holder = rights_reserved_regex().replace(caps[1].trim(), "");
        let company = holder.trim().to_string();
        if !company.is_empty() {
            return PolicyIdentity { company, ..PolicyIdentity::default() };
        }
    }

    PolicyIdentity::default()
}
