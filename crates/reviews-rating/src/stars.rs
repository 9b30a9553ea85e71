use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use reviews_core::constants::{
    LOW_RATING_STAR_PERCENT, LOW_RATING_THRESHOLD, STAR_BUCKET_STEP, STAR_TOKEN_PREFIX,
};

/// Half-star display bucket, stored as the share of a star in percent
/// steps of five: one half star per 5, so 3.5 stars is `s35`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StarBucket(u32);

impl StarBucket {
    /// Bucket shown for averages that are rated but very low.
    pub const LOW: StarBucket = StarBucket(LOW_RATING_STAR_PERCENT);

    /// Bucket for an average rating value.
    ///
    /// Values below 0.3 (and NaN) map to [`StarBucket::LOW`]; everything
    /// else rounds `value * 2` half-to-even and scales by 5.
    pub fn from_value(value: f64) -> Self {
        if value.is_nan() || value < LOW_RATING_THRESHOLD {
            return Self::LOW;
        }
        // Float-to-int `as` saturates, so absurd inputs cannot wrap.
        let halves = (value * 2.0).round_ties_even() as u32;
        Self(halves.saturating_mul(STAR_BUCKET_STEP))
    }

    pub fn percent(&self) -> u32 {
        self.0
    }

    /// Display token, `s` followed by at least two digits.
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StarBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{STAR_TOKEN_PREFIX}{:02}", self.0)
    }
}

/// Error parsing a star token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStarBucketError(String);

impl fmt::Display for ParseStarBucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid star token: {:?}", self.0)
    }
}

impl std::error::Error for ParseStarBucketError {}

impl FromStr for StarBucket {
    type Err = ParseStarBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix(STAR_TOKEN_PREFIX)
            .filter(|d| d.len() >= 2 && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| ParseStarBucketError(s.to_string()))?;
        let percent: u32 = digits
            .parse()
            .map_err(|_| ParseStarBucketError(s.to_string()))?;
        if percent % STAR_BUCKET_STEP != 0 {
            return Err(ParseStarBucketError(s.to_string()));
        }
        Ok(Self(percent))
    }
}

impl TryFrom<String> for StarBucket {
    type Error = ParseStarBucketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StarBucket> for String {
    fn from(bucket: StarBucket) -> Self {
        bucket.token()
    }
}
