#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.server.bind_addr, "127.0.0.1:3001");
        assert!(config.llm.enabled);
        assert_eq!(config.llm.model, "gemini-2.0-flash");
        assert_eq!(config.llm.analyze_retry_delays_ms, vec![0, 3_000, 8_000]);
        assert_eq!(config.llm.identify_retry_delays_ms, vec![0, 2_000, 5_000]);
        assert_eq!(config.llm.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.history.max_entries, 50);
        assert!(config.history.path.is_none());
    }

    #[test]
    fn test_default_generation_matches_analysis_settings() {
        let generation = LlmConfig::default().generation();
        assert_eq!(generation, GenerationSettings::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [llm]
            enabled = false
            analyze_retry_delays_ms = [0, 10]

            [history]
            path = "data/history.json"
            "#,
        )
        .unwrap();
        assert!(!config.llm.enabled);
        assert_eq!(config.llm.analyze_retry().max_attempts(), 2);
        assert_eq!(config.llm.identify_retry().max_attempts(), 3);
        assert_eq!(config.history.max_entries, 50);
        assert_eq!(config.history.path.as_deref(), Some(Path::new("data/history.json")));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml_str("[history]\nmax_entries = 0").is_err());
        assert!(Config::from_toml_str("[llm]\nanalyze_retry_delays_ms = []").is_err());
        assert!(Config::from_toml_str("[server\n").is_err());
    }

    #[test]
    fn test_api_key_precedence() {
        let with_key = Config::from_toml_str("[llm]\napi_key = \"from-file\"").unwrap();
        let key = with_key.llm.resolve_api_key(env(&[("POLICYSCAN_GEMINI_API_KEY", "from-env")]));
        assert_eq!(key.unwrap().expose_secret(), "from-file");

        let none = LlmConfig::default();
        let key = none.resolve_api_key(env(&[
            ("POLICYSCAN_GEMINI_API_KEY", "  "),
            ("GOOGLE_GENERATIVE_AI_API_KEY", "google"),
        ]));
        assert_eq!(key.unwrap().expose_secret(), "google");

        assert!(none.resolve_api_key(env(&[])).is_none());
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let config = Config::from_toml_str("[llm]\napi_key = \"AIza-very-secret\"").unwrap();
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn test_missing_named_file_is_an_error() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, PolicyScanError::Config(_)));
    }
}
