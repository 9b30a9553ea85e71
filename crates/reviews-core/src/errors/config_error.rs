//! Configuration errors. These are deployment mistakes, not per-request
//! conditions.

use super::error_code::{self, ReviewsErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("rating scale has {levels} levels but {labels} labels")]
    LabelCountMismatch { levels: usize, labels: usize },

    #[error("rating scale needs at least one label")]
    EmptyScale,

    #[error("security.secret_key is not set")]
    MissingSecret,

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },
}

impl ReviewsErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
