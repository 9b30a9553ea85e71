// Single source of truth for all default values.

// --- Security ---
pub const DEFAULT_MAX_AGE_SECS: i64 = 2 * 60 * 60; // 2 hours
/// Salt mixed into the HMAC key. Tokens issued by existing deployments were
/// signed with this salt, so changing it invalidates every open form.
pub const DEFAULT_KEY_SALT: &str = "django.contrib.forms.CommentSecurityForm";

// --- Rating ---
pub const DEFAULT_RATING_LEVELS: u8 = 5;
pub const DEFAULT_SHOW_RATING_TEXT: bool = true;

// --- Content ---
pub const DEFAULT_MAX_COMMENT_LENGTH: usize = 3000;
pub const DEFAULT_ALLOW_PROFANITIES: bool = false;

// --- Moderation ---
pub const DEFAULT_PUBLISH_UNMODERATED: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_ENV_VAR: &str = "REVIEWS_LOG";

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "reviews.toml";
