//! Stable error codes for hosts that map rejections to form messages.

pub const SECURITY_FAILED: &str = "SECURITY_FAILED";
pub const SIGNATURE_MISMATCH: &str = "SIGNATURE_MISMATCH";
pub const EXPIRED: &str = "EXPIRED";
pub const MALFORMED_TOKEN: &str = "MALFORMED_TOKEN";
pub const RATING_OUT_OF_RANGE: &str = "RATING_OUT_OF_RANGE";
pub const COMMENT_REQUIRED: &str = "COMMENT_REQUIRED";
pub const COMMENT_TOO_LONG: &str = "COMMENT_TOO_LONG";
pub const PROFANITY_DETECTED: &str = "PROFANITY_DETECTED";
pub const BOT_SUSPECTED: &str = "BOT_SUSPECTED";
pub const OWNERSHIP_SPOOFED: &str = "OWNERSHIP_SPOOFED";
pub const USER_SPOOFED: &str = "USER_SPOOFED";
pub const REVIEW_NOT_FOUND: &str = "REVIEW_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a stable, machine-readable code.
pub trait ReviewsErrorCode {
    fn error_code(&self) -> &'static str;
}
