//! Security token configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::defaults;

/// Configuration for the form security token.
#[derive(Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    /// Process-wide signing secret. Required to build a token guard.
    pub secret_key: Option<String>,
    /// Salt mixed into the signing key. Default: the legacy form salt.
    pub key_salt: Option<String>,
    /// How long a displayed form stays valid, in seconds. Default: 7200.
    pub max_age_secs: Option<i64>,
}

impl SecurityConfig {
    /// Returns the effective key salt.
    pub fn effective_key_salt(&self) -> &str {
        self.key_salt.as_deref().unwrap_or(defaults::DEFAULT_KEY_SALT)
    }

    /// Returns the effective token lifetime, defaulting to two hours.
    pub fn effective_max_age_secs(&self) -> i64 {
        self.max_age_secs.unwrap_or(defaults::DEFAULT_MAX_AGE_SECS)
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("key_salt", &self.key_salt)
            .field("max_age_secs", &self.max_age_secs)
            .finish()
    }
}
