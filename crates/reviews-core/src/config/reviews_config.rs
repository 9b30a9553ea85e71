//! Top-level review configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ContentConfig, ModerationConfig, RatingConfig, SecurityConfig};
use crate::constants::MAX_RATING_LEVELS;
use crate::errors::ConfigError;
use crate::tracing_setup::events;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REVIEWS_*`)
/// 2. Project config (`reviews.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReviewsConfig {
    pub security: SecurityConfig,
    pub rating: RatingConfig,
    pub content: ContentConfig,
    pub moderation: ModerationConfig,
}

impl ReviewsConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// `reviews.toml` in `root` is optional; when present it must parse.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut source = "defaults".to_string();

        let project_config_path = root.join(defaults::DEFAULT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            source = project_config_path.display().to_string();
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        events::config_loaded(
            &source,
            config.rating.effective_scale()?.labels().len(),
            config.security.effective_max_age_secs(),
        );
        Ok(config)
    }

    /// Load configuration from an explicit file, then apply env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (no env overrides).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReviewsConfig) -> Result<(), ConfigError> {
        if let Some(max_age) = config.security.max_age_secs {
            if max_age <= 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "security.max_age_secs".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref salt) = config.security.key_salt {
            if salt.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "security.key_salt".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(max_len) = config.content.max_comment_length {
            if max_len == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "content.max_comment_length".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if config.rating.labels.len() > MAX_RATING_LEVELS {
            return Err(ConfigError::ValidationFailed {
                field: "rating.labels".to_string(),
                message: format!("at most {MAX_RATING_LEVELS} labels are supported"),
            });
        }
        if config.content.profanities.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "content.profanities".to_string(),
                message: "terms must not be blank".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut ReviewsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ReviewsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` sets them.
    fn merge(base: &mut ReviewsConfig, other: &ReviewsConfig) {
        // Security
        if other.security.secret_key.is_some() {
            base.security.secret_key = other.security.secret_key.clone();
        }
        if other.security.key_salt.is_some() {
            base.security.key_salt = other.security.key_salt.clone();
        }
        if other.security.max_age_secs.is_some() {
            base.security.max_age_secs = other.security.max_age_secs;
        }

        // Rating
        if !other.rating.labels.is_empty() {
            base.rating.labels = other.rating.labels.clone();
        }
        if other.rating.show_rating_text.is_some() {
            base.rating.show_rating_text = other.rating.show_rating_text;
        }

        // Content
        if other.content.max_comment_length.is_some() {
            base.content.max_comment_length = other.content.max_comment_length;
        }
        if other.content.allow_profanities.is_some() {
            base.content.allow_profanities = other.content.allow_profanities;
        }
        if !other.content.profanities.is_empty() {
            base.content.profanities = other.content.profanities.clone();
        }

        // Moderation
        if other.moderation.publish_unmoderated.is_some() {
            base.moderation.publish_unmoderated = other.moderation.publish_unmoderated;
        }
    }

    /// Apply environment variable overrides from the process environment.
    fn apply_env_overrides(config: &mut ReviewsConfig) {
        Self::apply_overrides_from(config, |key| std::env::var(key).ok());
    }

    /// Apply `REVIEWS_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(config: &mut ReviewsConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("REVIEWS_SECRET_KEY") {
            config.security.secret_key = Some(val);
        }
        if let Some(val) = lookup("REVIEWS_COMPOSE_TIMEOUT") {
            if let Ok(v) = val.parse::<i64>() {
                config.security.max_age_secs = Some(v);
            }
        }
        if let Some(val) = lookup("REVIEWS_MAX_LENGTH") {
            if let Ok(v) = val.parse::<usize>() {
                config.content.max_comment_length = Some(v);
            }
        }
        if let Some(val) = lookup("REVIEWS_ALLOW_PROFANITIES") {
            if let Ok(v) = val.parse::<bool>() {
                config.content.allow_profanities = Some(v);
            }
        }
        if let Some(val) = lookup("REVIEWS_PUBLISH_UNMODERATED") {
            if let Ok(v) = val.parse::<bool>() {
                config.moderation.publish_unmoderated = Some(v);
            }
        }
        if let Some(val) = lookup("REVIEWS_SHOW_RATING_TEXT") {
            if let Ok(v) = val.parse::<bool>() {
                config.rating.show_rating_text = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
