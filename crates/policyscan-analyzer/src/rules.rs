//! Rule tables for the local engine.
//!
//! Each table is an ordered list of (pattern, label[, weight]) entries. Order
//! is significant: it fixes the order of labels in every result. Patterns are
//! compiled once, case-insensitively, on first use and shared read-only.
//! Word boundaries in the tables are ASCII boundaries: any non-ASCII letter
//! counts as a non-word character next to a keyword.
//!
//! Weights and caps are a fixed scoring contract; changing any entry changes
//! every score produced downstream.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// Categories of personal data a policy says it collects.
pub const DATA_COLLECTION_PATTERNS: &[(&str, &str)] = &[
    (r"\b(full name|first name|last name|your name|real name)\b", "Full name and personal identifiers"),
    (r"\b(email|e-mail)\b", "Email address"),
    (r"\b(phone|telephone|mobile number|call logs)\b", "Phone number and call information"),
    (r"\b(address|postal|zip code|mailing)\b", "Physical address and postal information"),
    (r"\b(date of birth|birthday|age|DOB)\b", "Date of birth and age information"),
    (r"\b(payment|credit card|billing|financial|bank|debit)\b", "Payment and financial information"),
    (r"\b(photos?|images?|pictures?|videos?|media)\b", "Photos, videos, and media content"),
    (r"\b(messages?|chats?|communications?|DMs?|direct message)\b", "Messages and communications content"),
    (r"\b(contacts?|address book|friends? list)\b", "Contacts and address book data"),
    (r"\b(location|GPS|geo|latitude|longitude|coordinates)\b", "Precise location and GPS data"),
    (r"\b(IP address|internet protocol)\b", "IP address"),
    (r"\b(device|hardware|IMEI|serial number|device identifier)\b", "Device identifiers and hardware info"),
    (r"\b(browser|user agent|operating system)\b", "Browser and operating system information"),
    (r"\b(cookies?|pixel|beacon|tracking|web beacon)\b", "Cookies and tracking technologies"),
    (r"\b(browsing|search|usage|activity|click|interaction|viewed)\b", "Browsing history and usage activity"),
    (r"\b(purchase|transaction|order|buy|shopping)\b", "Purchase and transaction history"),
    (r"\b(biometric|fingerprint|face|facial|voice|voiceprint)\b", "Biometric data (face, voice, fingerprint)"),
    (r"\b(health|medical|fitness|wellness)\b", "Health and medical information"),
    (r"\b(social security|SSN|passport|ID number|driver.?s? license)\b", "Government-issued ID numbers"),
    (r"\b(Wi-?Fi|cell tower|Bluetooth|sensor|accelerometer|gyroscope)\b", "Sensor and network proximity data"),
    (r"\b(audio|voice|recording|microphone)\b", "Audio and voice recordings"),
    (r"\b(employment|job|occupation|employer|work)\b", "Employment information"),
    (r"\b(education|school|university|degree|student)\b", "Education information"),
    (r"\b(gender|sex|race|ethnicity|religion|political)\b", "Demographic and sensitive categories"),
    (r"\b(third.?party|external.*(?:source|partner|provider))\b", "Data from third-party sources"),
];

/// Categories of third parties a policy says it shares data with.
pub const DATA_SHARING_PATTERNS: &[(&str, &str)] = &[
    (r"\b(advertis(?:er|ing)|ad (?:network|partner)|targeted ad)\b", "Advertising networks and ad partners"),
    (r"\b(analytics?|measurement|metrics)\b", "Analytics and measurement providers"),
    (r"\b(data brokers?|data marketplaces?|data resellers?)\b", "Data brokers and resellers"),
    (r"\b(law enforcement|government|legal|court|subpoena|warrant)\b", "Law enforcement and government agencies"),
    (r"\b(service provider|vendor|processor|contractor|supplier)\b", "Service providers and contractors"),
    (r"\b(business partner|commercial partner|strategic partner)\b", "Business and commercial partners"),
    (r"\b(affiliate|subsidiary|parent company|related compan)\b", "Affiliated companies and subsidiaries"),
    (r"\b(social media|facebook|google|twitter|meta|instagram)\b", "Social media platforms"),
    (r"\b(payment processor|stripe|paypal|financial institution)\b", "Payment processors and financial institutions"),
    (r"\b(cloud|hosting|infrastructure|AWS|Azure|storage)\b", "Cloud infrastructure providers"),
    (r"\b(marketing|promotions?|campaigns?)\b", "Marketing and promotions partners"),
    (r"\b(research|academic|universit)\b", "Research institutions"),
    (r"\b(insurance|insurer)\b", "Insurance companies"),
    (r"\b(merger|acquisition|sale|bankruptcy|successor)\b", "Potential acquirers in mergers or sales"),
    (r"\b(developer|app|plugin|integration|SDK|API)\b", "Third-party developers and integrations"),
];

/// Concerning practices and the points each adds to the risk score.
pub const RISK_PATTERNS: &[(&str, &str, u32)] = &[
    (r"\b(indefinite|unlimited|perpetual|forever|no.*time limit)\b", "Data may be retained indefinitely with no clear expiration", 12),
    (r"\b(sell|sold|monetiz|commercializ)\b.*\b(data|information)\b", "Your data may be sold or commercially monetized", 15),
    (r"\b(cross.?(?:platform|site|service|device)|across.*(?:service|platform|app))\b", "Cross-platform tracking and data sharing between services", 10),
    (r"\b(third.?part(?:y|ies)).*\b(track|cookie|pixel|beacon)\b", "Third-party tracking across the web", 12),
    (r"\b(location|GPS).*\b(precise|exact|real.?time|continuous)\b", "Precise real-time location tracking", 10),
    (r"\bprofile\b.*\b(build|creat|construct|develop|infer)\b", "Behavioral profiling from your activity data", 8),
    (r"\b(chang|modif|updat|revis).*\b(policy|terms|privacy)\b.*\b(without|any time|discretion)\b", "Policy can change without explicit user consent", 8),
    (r"\b(share|disclos|provid).*\b(broad|wide|extensive|unlimit)\b", "Broad and extensive data sharing practices", 10),
    (r"\b(backup|archive|residual).*\b(retain|remain|persist|delet)\b", "Deleted data persists in backups and archives", 7),
    (r"\b(automat|algorithm|machine learning|AI|artificial)\b.*\b(decision|profil|analys|inference)\b", "Automated decision-making and algorithmic profiling", 8),
    (r"\b(vague|unclear|ambiguous|discretion|may|might|could)\b.*\b(share|collect|use|retain|transfer)\b", "Vague language allowing broad data practices", 8),
    (r"\b(opt.?out).*\b(limit|restrict|reduc|affect)\b.*\b(function|feature|service|experience)\b", "Opting out reduces functionality or service quality", 6),
    (r"\b(child|minor|under.?13|COPPA|kid)\b", "Potential exposure risks to children's data", 5),
    (r"\b(transfer|transmit|send).*\b(country|international|overseas|abroad|jurisdiction)\b", "International data transfers to countries with weaker protections", 7),
    (r"\b(consent|agree).*\b(continu|using|browse|implicit)\b", "Implied consent through continued use rather than explicit opt-in", 6),
    (r"\b(sensitive|special.*categor|protected)\b.*\b(data|information)\b", "Collection of sensitive or specially protected data categories", 10),
    (r"\b(facial|recognition|biometric).*\b(scan|detect|identif|analyz)\b", "Facial recognition or biometric analysis", 12),
    (r"\b(microphone|camera|screen).*\b(access|record|captur)\b", "Access to device microphone, camera, or screen", 8),
];

/// A compiled (matcher, label) entry.
#[derive(Debug)]
pub struct ClassificationRule {
    pub matcher: Regex,
    pub label: &'static str,
}

/// A compiled (matcher, finding, weight) entry.
#[derive(Debug)]
pub struct WeightedRiskRule {
    pub matcher: Regex,
    pub finding: &'static str,
    pub weight: u32,
}

impl ClassificationRule {
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

impl WeightedRiskRule {
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(&pattern.replace(r"\b", r"(?-u:\b)"))
        .case_insensitive(true)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in rule pattern {pattern:?}: {e}"))
}

fn compile_table(table: &[(&'static str, &'static str)]) -> Vec<ClassificationRule> {
    table
        .iter()
        .map(|(pattern, label)| ClassificationRule { matcher: compile(pattern), label: *label })
        .collect()
}

pub fn data_collection_rules() -> &'static [ClassificationRule] {
    static RULES: OnceLock<Vec<ClassificationRule>> = OnceLock::new();
    RULES.get_or_init(|| compile_table(DATA_COLLECTION_PATTERNS))
}

pub fn data_sharing_rules() -> &'static [ClassificationRule] {
    static RULES: OnceLock<Vec<ClassificationRule>> = OnceLock::new();
    RULES.get_or_init(|| compile_table(DATA_SHARING_PATTERNS))
}

pub fn risk_rules() -> &'static [WeightedRiskRule] {
    static RULES: OnceLock<Vec<WeightedRiskRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RISK_PATTERNS
            .iter()
            .map(|(pattern, finding, weight)| WeightedRiskRule {
                matcher: compile(pattern),
                finding: *finding,
                weight: *weight,
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_tables_compile() {
        assert_eq!(data_collection_rules().len(), 25);
        assert_eq!(data_sharing_rules().len(), 15);
        assert_eq!(risk_rules().len(), 18);
    }

    #[test]
    fn test_labels_are_unique_within_each_table() {
        let collect: HashSet<_> = DATA_COLLECTION_PATTERNS.iter().map(|(_, l)| l).collect();
        assert_eq!(collect.len(), DATA_COLLECTION_PATTERNS.len());
        let share: HashSet<_> = DATA_SHARING_PATTERNS.iter().map(|(_, l)| l).collect();
        assert_eq!(share.len(), DATA_SHARING_PATTERNS.len());
        let risk: HashSet<_> = RISK_PATTERNS.iter().map(|(_, f, _)| f).collect();
        assert_eq!(risk.len(), RISK_PATTERNS.len());
    }

    #[test]
    fn test_risk_weight_total() {
        let total: u32 = RISK_PATTERNS.iter().map(|(_, _, w)| w).sum();
        assert_eq!(total, 162);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let email = &data_collection_rules()[1];
        assert!(email.matches("Your E-MAIL is stored"));
        assert!(!email.matches("emailing lists"));
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        let age = &data_collection_rules()[4];
        assert!(age.matches("Éage verification"));
        assert!(age.matches("ageé"));
        assert!(!age.matches("agent"));
        let email = &data_collection_rules()[1];
        assert!(email.matches("naïve email"));
        assert!(email.matches("Ñemail"));
    }
}
