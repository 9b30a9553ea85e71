use super::error_code::{self, ReviewsErrorCode};
use super::{ConfigError, ContentError, IdentityError, VerifyError};

/// Top-level error for the review core.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewsError {
    #[error("submission failed security verification: {0}")]
    Security(#[from] VerifyError),

    #[error("invalid review content: {0}")]
    Content(#[from] ContentError),

    #[error("identity check failed: {0}")]
    Identity(#[from] IdentityError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ReviewsError {
    /// Security and content failures are shown back to the submitter.
    /// Configuration failures need an operator.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

impl ReviewsErrorCode for ReviewsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Security(_) => error_code::SECURITY_FAILED,
            Self::Content(e) => e.error_code(),
            Self::Identity(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ReviewsResult<T> = Result<T, ReviewsError>;
