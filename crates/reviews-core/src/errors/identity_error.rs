//! Identity and ownership errors raised when an existing review is edited.

use super::error_code::{self, ReviewsErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("review target spoofed: review belongs to {stored}, token names {claimed}")]
    OwnershipSpoofed { stored: String, claimed: String },

    #[error("user spoofing: review was not written by the submitter")]
    UserSpoofed,

    #[error("referenced review gone: {id}")]
    ReviewNotFound { id: String },
}

impl ReviewsErrorCode for IdentityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OwnershipSpoofed { .. } => error_code::OWNERSHIP_SPOOFED,
            Self::UserSpoofed => error_code::USER_SPOOFED,
            Self::ReviewNotFound { .. } => error_code::REVIEW_NOT_FOUND,
        }
    }
}
