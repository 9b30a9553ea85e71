//! Configuration for the review core.
//! TOML-based, layered: env > project file > compiled defaults.

pub mod content_config;
pub mod defaults;
pub mod moderation_config;
pub mod rating_config;
pub mod reviews_config;
pub mod security_config;

pub use content_config::ContentConfig;
pub use moderation_config::ModerationConfig;
pub use rating_config::RatingConfig;
pub use reviews_config::ReviewsConfig;
pub use security_config::SecurityConfig;
