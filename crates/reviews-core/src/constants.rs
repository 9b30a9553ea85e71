/// Review core version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Length of a hex-encoded security signature (160-bit digest).
pub const SIGNATURE_HEX_LEN: usize = 40;

/// Averages below this render with the low-rating star asset instead of the
/// half-star formula, so a very low rating never looks unrated.
pub const LOW_RATING_THRESHOLD: f64 = 0.3;

/// Star bucket (percent of a full star, token `s05`) used for averages
/// below [`LOW_RATING_THRESHOLD`].
pub const LOW_RATING_STAR_PERCENT: u32 = 5;

/// Prefix shared by every star bucket token.
pub const STAR_TOKEN_PREFIX: &str = "s";

/// Percentage points per half star in a star bucket token.
pub const STAR_BUCKET_STEP: u32 = 5;

/// Smallest weight a rating can carry.
pub const MIN_WEIGHT: u32 = 1;

/// Largest supported number of rating levels.
pub const MAX_RATING_LEVELS: usize = u8::MAX as usize;

/// Default rating labels, lowest first.
pub const DEFAULT_RATING_LABELS: [&str; 5] =
    ["Terrible", "Poor", "Average", "Very Good", "Excellent"];

/// Hidden form field names carried by a security token.
pub const FIELD_CONTENT_TYPE: &str = "content_type";
pub const FIELD_OBJECT_PK: &str = "object_pk";
pub const FIELD_TIMESTAMP: &str = "timestamp";
pub const FIELD_SECURITY_HASH: &str = "security_hash";
