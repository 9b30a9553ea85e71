//! # reviews-rating
//!
//! Aggregates review ratings into a weighted average and maps an average to
//! a display label and a half-star bucket token (`s05`..`s50` on a five
//! level scale).

pub mod average;
pub mod classify;
pub mod engine;
pub mod stars;

pub use average::{weighted_average, weighted_average_by, weighted_average_records};
pub use classify::{classify, AggregateResult};
pub use engine::{RatingAggregator, RatingSummary};
pub use stars::StarBucket;
