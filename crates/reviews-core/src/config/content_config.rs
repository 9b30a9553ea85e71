//! Review content rules configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Maximum comment length in characters. Default: 3000.
    pub max_comment_length: Option<usize>,
    /// Accept comments containing disallowed terms. Default: false.
    pub allow_profanities: Option<bool>,
    /// Disallowed terms, matched case-insensitively anywhere in a comment.
    pub profanities: Vec<String>,
}

impl ContentConfig {
    pub fn effective_max_comment_length(&self) -> usize {
        self.max_comment_length
            .unwrap_or(defaults::DEFAULT_MAX_COMMENT_LENGTH)
    }

    pub fn effective_allow_profanities(&self) -> bool {
        self.allow_profanities
            .unwrap_or(defaults::DEFAULT_ALLOW_PROFANITIES)
    }

    /// True when comments must be screened for disallowed terms.
    pub fn rejects_profanities(&self) -> bool {
        !self.effective_allow_profanities() && !self.profanities.is_empty()
    }
}
