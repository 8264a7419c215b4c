//! Configuration loading for policyscan.
//! Reads policyscan.toml from the current directory or the path in the
//! POLICYSCAN_CONFIG env var. Every field has a default, so a missing
//! default file yields a working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use policyscan_common::PolicyScanError;
use policyscan_llm::{GenerationSettings, RetryPolicy};

pub const CONFIG_ENV: &str = "POLICYSCAN_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "policyscan.toml";

/// Env vars consulted for the upstream key when the file has none, in order.
pub const API_KEY_ENVS: [&str; 2] = ["POLICYSCAN_GEMINI_API_KEY", "GOOGLE_GENERATIVE_AI_API_KEY"];

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

fn default_bind_addr() -> String { "127.0.0.1:3001".to_string() }

#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    /// Never printed: `SecretString` redacts itself in `Debug`.
    pub api_key: Option<SecretString>,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_analyze_delays")]
    pub analyze_retry_delays_ms: Vec<u64>,
    #[serde(default = "default_identify_delays")]
    pub identify_retry_delays_ms: Vec<u64>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: bool_true(),
            model: default_model(),
            api_key: None,
            request_timeout_secs: default_timeout_secs(),
            analyze_retry_delays_ms: default_analyze_delays(),
            identify_retry_delays_ms: default_identify_delays(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

fn bool_true()                 -> bool     { true }
fn default_model()             -> String   { "gemini-2.0-flash".to_string() }
fn default_timeout_secs()      -> u64      { 30 }
fn default_analyze_delays()    -> Vec<u64> { vec![0, 3_000, 8_000] }
fn default_identify_delays()   -> Vec<u64> { vec![0, 2_000, 5_000] }
fn default_temperature()       -> f32      { 0.4 }
fn default_top_p()             -> f32      { 0.9 }
fn default_max_output_tokens() -> u32      { 3_000 }

impl LlmConfig {
    /// Key from the file if set and non-blank, otherwise the first non-blank
    /// value among [`API_KEY_ENVS`] as returned by `lookup`.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<SecretString> {
        if let Some(key) = &self.api_key {
            if !key.expose_secret().trim().is_empty() {
                return Some(SecretString::from(key.expose_secret().trim().to_string()));
            }
        }
        API_KEY_ENVS
            .iter()
            .filter_map(|&name| lookup(name))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .map(SecretString::from)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn analyze_retry(&self) -> RetryPolicy {
        RetryPolicy::from_millis(&self.analyze_retry_delays_ms)
    }

    pub fn identify_retry(&self) -> RetryPolicy {
        RetryPolicy::from_millis(&self.identify_retry_delays_ms)
    }

    pub fn generation(&self) -> GenerationSettings {
        GenerationSettings {
            temperature: self.temperature,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// JSON file to persist history in; in-memory when absent.
    pub path: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { max_entries: default_max_entries(), path: None }
    }
}

fn default_max_entries() -> usize { policyscan_db::DEFAULT_MAX_ENTRIES }

mod tests;

impl Config {
    /// Load configuration from policyscan.toml.
    /// Checks POLICYSCAN_CONFIG first. An explicitly named file must exist;
    /// a missing default file means "all defaults".
    pub fn load() -> Result<Self, PolicyScanError> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, PolicyScanError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PolicyScanError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, PolicyScanError> {
        let config: Config =
            toml::from_str(content).map_err(|e| PolicyScanError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), PolicyScanError> {
        if self.history.max_entries == 0 {
            return Err(PolicyScanError::Config("history.max_entries must be at least 1".into()));
        }
        if self.llm.analyze_retry_delays_ms.is_empty() || self.llm.identify_retry_delays_ms.is_empty() {
            return Err(PolicyScanError::Config("retry delay lists must not be empty".into()));
        }
        Ok(())
    }
}
