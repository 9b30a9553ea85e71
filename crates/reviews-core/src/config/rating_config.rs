//! Rating scale and display configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::RatingScale;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating labels, lowest first. Empty means the default five labels.
    pub labels: Vec<String>,
    /// Show the textual label next to the stars. Default: true.
    pub show_rating_text: Option<bool>,
}

impl RatingConfig {
    /// Returns the configured rating scale, or the default scale when no
    /// labels are configured.
    pub fn effective_scale(&self) -> Result<RatingScale, ConfigError> {
        if self.labels.is_empty() {
            Ok(RatingScale::default())
        } else {
            RatingScale::new(self.labels.iter().cloned())
        }
    }

    pub fn effective_show_rating_text(&self) -> bool {
        self.show_rating_text
            .unwrap_or(defaults::DEFAULT_SHOW_RATING_TEXT)
    }
}
