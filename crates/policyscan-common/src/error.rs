use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyScanError {
    /// Normalised policy text is below the minimum analysable length.
    #[error("Policy text is too short: {len} characters (minimum {min})")]
    InputTooShort { len: usize, min: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, PolicyScanError>;
