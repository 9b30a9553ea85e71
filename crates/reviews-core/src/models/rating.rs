use serde::{Deserialize, Serialize};

use crate::constants::MIN_WEIGHT;

/// One submitted opinion: an integer rating and the weight it carries in
/// the average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub rating: u8,
    pub weight: u32,
}

impl RatingEntry {
    /// Create an entry. Weights below 1 are raised to 1.
    pub fn new(rating: u8, weight: u32) -> Self {
        Self {
            rating,
            weight: weight.max(MIN_WEIGHT),
        }
    }

    /// Create an entry with the default weight of 1.
    pub fn unweighted(rating: u8) -> Self {
        Self::new(rating, MIN_WEIGHT)
    }
}

impl From<u8> for RatingEntry {
    fn from(rating: u8) -> Self {
        Self::unweighted(rating)
    }
}

impl From<(u8, u32)> for RatingEntry {
    fn from((rating, weight): (u8, u32)) -> Self {
        Self::new(rating, weight)
    }
}
