//! Content validation errors.

use super::error_code::{self, ReviewsErrorCode};

/// Reasons submitted review content is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("rating should be between 1 and {max}, got {value}")]
    RatingOutOfRange { value: i64, max: u8 },

    #[error("rating is not a whole number: {raw:?}")]
    InvalidRating { raw: String },

    #[error("comment is required")]
    CommentRequired,

    #[error("comment is {length} characters, max {max}")]
    CommentTooLong { length: usize, max: usize },

    #[error("comment contains disallowed terms: {}", terms.join(", "))]
    ProfanityDetected { terms: Vec<String> },

    #[error("honeypot field was filled in")]
    BotSuspected,
}

impl ReviewsErrorCode for ContentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RatingOutOfRange { .. } | Self::InvalidRating { .. } => {
                error_code::RATING_OUT_OF_RANGE
            }
            Self::CommentRequired => error_code::COMMENT_REQUIRED,
            Self::CommentTooLong { .. } => error_code::COMMENT_TOO_LONG,
            Self::ProfanityDetected { .. } => error_code::PROFANITY_DETECTED,
            Self::BotSuspected => error_code::BOT_SUSPECTED,
        }
    }
}
