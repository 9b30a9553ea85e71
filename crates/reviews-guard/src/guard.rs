//! Issuing and verifying review form security tokens.

use std::fmt;

use reviews_core::config::defaults::{DEFAULT_KEY_SALT, DEFAULT_MAX_AGE_SECS};
use reviews_core::config::SecurityConfig;
use reviews_core::errors::{ConfigError, ReviewsErrorCode, VerifyError};
use reviews_core::tracing_setup::events;
use reviews_core::TargetReference;

use crate::secret::SecretKey;
use crate::signature::{self, HmacSha1};
use crate::token::{signed_message, SecurityToken};

/// Stateless token issuer and verifier.
///
/// The signature depends only on the target type, target key, timestamp,
/// and the secret, so any process holding the same secret and salt can
/// verify tokens issued by any other.
#[derive(Clone)]
pub struct TokenGuard {
    mac: HmacSha1,
    max_age_secs: i64,
}

impl TokenGuard {
    /// Create a guard with the default salt and a two-hour window.
    pub fn new(secret: SecretKey) -> Result<Self, ConfigError> {
        Self::with_salt(secret, DEFAULT_KEY_SALT)
    }

    /// Create a guard with a custom salt.
    pub fn with_salt(secret: SecretKey, salt: &str) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        Ok(Self {
            mac: signature::keyed_mac(salt, &secret)?,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
        })
    }

    /// Build a guard from the security section of the config.
    pub fn from_config(config: &SecurityConfig) -> Result<Self, ConfigError> {
        let secret = config
            .secret_key
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        Ok(Self::with_salt(SecretKey::from(secret), config.effective_key_salt())?
            .with_max_age(config.effective_max_age_secs()))
    }

    /// Override the window used by [`verify_default`](Self::verify_default).
    pub fn with_max_age(mut self, max_age_secs: i64) -> Self {
        self.max_age_secs = max_age_secs;
        self
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Signature over `type-key-timestamp`.
    pub fn sign(&self, target_type: &str, target_key: &str, timestamp: i64) -> String {
        signature::sign(&self.mac, &signed_message(target_type, target_key, timestamp))
    }

    /// Issue a token for `target` stamped with `now` (unix seconds).
    pub fn generate(&self, target: &TargetReference, now: i64) -> SecurityToken {
        let token = SecurityToken {
            target_type: target.target_type().to_string(),
            target_key: target.target_key().to_string(),
            timestamp: now,
            signature: self.sign(target.target_type(), target.target_key(), now),
        };
        events::token_issued(&target.to_string(), now);
        token
    }

    /// Verify a token against `now` and an explicit window.
    ///
    /// The signature is checked first, so a tampered timestamp reports
    /// `SignatureMismatch` rather than `Expired`.
    pub fn verify(
        &self,
        token: &SecurityToken,
        now: i64,
        max_age_secs: i64,
    ) -> Result<(), VerifyError> {
        let result = self.check(token, now, max_age_secs);
        if let Err(ref e) = result {
            events::token_rejected(
                &format!("{}:{}", token.target_type, token.target_key),
                e.error_code(),
            );
        }
        result
    }

    /// Verify using the guard's configured window.
    pub fn verify_default(&self, token: &SecurityToken, now: i64) -> Result<(), VerifyError> {
        self.verify(token, now, self.max_age_secs)
    }

    fn check(&self, token: &SecurityToken, now: i64, max_age_secs: i64) -> Result<(), VerifyError> {
        let expected = self.sign(&token.target_type, &token.target_key, token.timestamp);
        if !signature::constant_time_eq(expected.as_bytes(), token.signature.as_bytes()) {
            return Err(VerifyError::SignatureMismatch);
        }

        let age_secs = now.saturating_sub(token.timestamp);
        if age_secs > max_age_secs {
            return Err(VerifyError::Expired {
                age_secs,
                max_age_secs,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for TokenGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGuard")
            .field("key", &"<redacted>")
            .field("max_age_secs", &self.max_age_secs)
            .finish()
    }
}
