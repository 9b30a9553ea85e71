use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RATING_LABELS, MAX_RATING_LEVELS};
use crate::errors::ConfigError;

/// Ordered rating labels, lowest first. The number of labels is the number
/// of rating levels K; valid ratings are `1..=K`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RatingScale {
    labels: Vec<String>,
}

impl RatingScale {
    /// Build a scale from its labels.
    pub fn new<I, S>(labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConfigError::EmptyScale);
        }
        if labels.len() > MAX_RATING_LEVELS {
            return Err(ConfigError::ValidationFailed {
                field: "rating.labels".to_string(),
                message: format!("at most {MAX_RATING_LEVELS} labels are supported"),
            });
        }
        Ok(Self { labels })
    }

    /// Build a scale with an explicit level count, which must match the
    /// number of labels.
    pub fn with_levels<I, S>(levels: u8, labels: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scale = Self::new(labels)?;
        if scale.labels.len() != levels as usize {
            return Err(ConfigError::LabelCountMismatch {
                levels: levels as usize,
                labels: scale.labels.len(),
            });
        }
        Ok(scale)
    }

    /// Number of rating levels (K).
    pub fn levels(&self) -> u8 {
        // Bounded by MAX_RATING_LEVELS at construction.
        self.labels.len() as u8
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn contains(&self, rating: i64) -> bool {
        (1..=i64::from(self.levels())).contains(&rating)
    }

    /// Label for an integer rating, or `None` outside `1..=K`.
    pub fn label_for(&self, rating: u8) -> Option<&str> {
        let index = usize::from(rating).checked_sub(1)?;
        self.labels.get(index).map(String::as_str)
    }
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            labels: DEFAULT_RATING_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for RatingScale {
    type Error = ConfigError;

    fn try_from(labels: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(labels)
    }
}

impl From<RatingScale> for Vec<String> {
    fn from(scale: RatingScale) -> Self {
        scale.labels
    }
}
