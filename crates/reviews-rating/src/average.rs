use reviews_core::constants::MIN_WEIGHT;
use reviews_core::{RatingEntry, ReviewRecord, WeightResolver};

/// Weighted mean `Σ(rating·weight) / Σweight`, or `None` when there is
/// nothing to average.
///
/// Weights below 1 are treated as 1.
pub fn weighted_average(entries: &[RatingEntry]) -> Option<f64> {
    weighted_mean(entries.iter().copied())
}

/// Weighted mean over stored reviews using the weight each review was
/// saved with.
pub fn weighted_average_records(records: &[ReviewRecord]) -> Option<f64> {
    weighted_mean(records.iter().map(ReviewRecord::entry))
}

/// Weighted mean over stored reviews, re-resolving each review's weight
/// through `resolver` and ignoring the stored value.
pub fn weighted_average_by(records: &[ReviewRecord], resolver: &dyn WeightResolver) -> Option<f64> {
    weighted_mean(records.iter().map(|record| {
        RatingEntry::new(
            record.rating,
            resolver.resolve_clamped(record.submitter.as_ref(), &record.target),
        )
    }))
}

fn weighted_mean(entries: impl Iterator<Item = RatingEntry>) -> Option<f64> {
    let (total, total_weight) = entries.fold((0u64, 0u64), |(total, weights), entry| {
        let weight = u64::from(entry.weight.max(MIN_WEIGHT));
        (total + u64::from(entry.rating) * weight, weights + weight)
    });
    if total_weight == 0 {
        return None;
    }
    Some(total as f64 / total_weight as f64)
}
