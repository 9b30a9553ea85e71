//! Security token verification errors.

use super::error_code::{self, ReviewsErrorCode};

/// Reasons a security token is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerifyError {
    #[error("security hash check failed")]
    SignatureMismatch,

    #[error("timestamp check failed: token is {age_secs}s old, max {max_age_secs}s")]
    Expired { age_secs: i64, max_age_secs: i64 },

    #[error("missing security field: {field}")]
    MissingField { field: &'static str },

    #[error("malformed timestamp: {value:?}")]
    MalformedTimestamp { value: String },
}

impl ReviewsErrorCode for VerifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SignatureMismatch => error_code::SIGNATURE_MISMATCH,
            Self::Expired { .. } => error_code::EXPIRED,
            Self::MissingField { .. } | Self::MalformedTimestamp { .. } => {
                error_code::MALFORMED_TOKEN
            }
        }
    }
}
