use std::fmt;
use std::sync::Arc;

use reviews_core::config::ReviewsConfig;
use reviews_core::config::defaults::DEFAULT_MAX_COMMENT_LENGTH;
use reviews_core::errors::{ConfigError, ContentError};
use reviews_core::{ProfanityChecker, RatingScale};

use crate::profanity::ProfanityFilter;
use crate::submission::RawSubmission;

/// Rating and comment after content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedContent {
    pub rating: u8,
    /// Comment with surrounding whitespace removed.
    pub comment: String,
}

/// Content rules for a submitted review.
#[derive(Clone)]
pub struct ContentRules {
    scale: RatingScale,
    max_comment_length: usize,
    profanity: Option<Arc<dyn ProfanityChecker>>,
}

impl ContentRules {
    /// Rules for `scale` with the default comment length and no profanity
    /// screening.
    pub fn new(scale: RatingScale) -> Self {
        Self {
            scale,
            max_comment_length: DEFAULT_MAX_COMMENT_LENGTH,
            profanity: None,
        }
    }

    pub fn from_config(config: &ReviewsConfig) -> Result<Self, ConfigError> {
        let mut rules = Self::new(config.rating.effective_scale()?)
            .with_max_comment_length(config.content.effective_max_comment_length());
        if config.content.rejects_profanities() {
            let filter = ProfanityFilter::new(config.content.profanities.iter().cloned())?;
            rules = rules.with_profanity_checker(Arc::new(filter));
        }
        Ok(rules)
    }

    pub fn with_max_comment_length(mut self, max: usize) -> Self {
        self.max_comment_length = max;
        self
    }

    pub fn with_profanity_checker(mut self, checker: Arc<dyn ProfanityChecker>) -> Self {
        self.profanity = Some(checker);
        self
    }

    pub fn scale(&self) -> &RatingScale {
        &self.scale
    }

    pub fn max_comment_length(&self) -> usize {
        self.max_comment_length
    }

    pub fn screens_profanity(&self) -> bool {
        self.profanity.is_some()
    }

    /// The honeypot must be left empty; any content at all marks a bot.
    pub fn check_honeypot(&self, honeypot: Option<&str>) -> Result<(), ContentError> {
        match honeypot {
            Some(value) if !value.is_empty() => Err(ContentError::BotSuspected),
            _ => Ok(()),
        }
    }

    /// Parse a submitted rating and check it is on the scale.
    pub fn check_rating(&self, raw: Option<&str>) -> Result<u8, ContentError> {
        let raw = raw.unwrap_or_default();
        let value: i64 = raw.trim().parse().map_err(|_| ContentError::InvalidRating {
            raw: raw.to_string(),
        })?;
        if !self.scale.contains(value) {
            return Err(ContentError::RatingOutOfRange {
                value,
                max: self.scale.levels(),
            });
        }
        u8::try_from(value).map_err(|_| ContentError::RatingOutOfRange {
            value,
            max: self.scale.levels(),
        })
    }

    /// Check a comment and return it trimmed. Length is counted in
    /// characters after trimming.
    pub fn check_comment(&self, raw: Option<&str>) -> Result<String, ContentError> {
        let comment = raw.unwrap_or_default().trim();
        if comment.is_empty() {
            return Err(ContentError::CommentRequired);
        }
        let length = comment.chars().count();
        if length > self.max_comment_length {
            return Err(ContentError::CommentTooLong {
                length,
                max: self.max_comment_length,
            });
        }
        if let Some(ref checker) = self.profanity {
            let terms = checker.disallowed_terms(comment);
            if !terms.is_empty() {
                return Err(ContentError::ProfanityDetected { terms });
            }
        }
        Ok(comment.to_string())
    }

    /// Check rating then comment. The honeypot is left to the caller.
    pub fn check_content(&self, raw: &RawSubmission) -> Result<ValidatedContent, ContentError> {
        let rating = self.check_rating(raw.rating.as_deref())?;
        let comment = self.check_comment(raw.comment.as_deref())?;
        Ok(ValidatedContent { rating, comment })
    }

    /// Standalone entry point running every content rule: honeypot, rating,
    /// then comment. [`SubmissionPipeline`](crate::SubmissionPipeline)
    /// checks the honeypot before the security token and uses
    /// [`check_content`](Self::check_content) afterwards.
    pub fn validate(&self, raw: &RawSubmission) -> Result<ValidatedContent, ContentError> {
        self.check_honeypot(raw.honeypot.as_deref())?;
        self.check_content(raw)
    }
}

impl Default for ContentRules {
    fn default() -> Self {
        Self::new(RatingScale::default())
    }
}

impl fmt::Debug for ContentRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentRules")
            .field("scale", &self.scale)
            .field("max_comment_length", &self.max_comment_length)
            .field("screens_profanity", &self.profanity.is_some())
            .finish()
    }
}
