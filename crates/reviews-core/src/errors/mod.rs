//! Error handling for the review core.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod content_error;
pub mod error_code;
pub mod identity_error;
pub mod reviews_error;
pub mod verify_error;

pub use config_error::ConfigError;
pub use content_error::ContentError;
pub use error_code::ReviewsErrorCode;
pub use identity_error::IdentityError;
pub use reviews_error::{ReviewsError, ReviewsResult};
pub use verify_error::VerifyError;
