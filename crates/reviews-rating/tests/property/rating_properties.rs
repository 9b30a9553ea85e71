use proptest::prelude::*;

use reviews_core::RatingEntry;
use reviews_rating::{weighted_average, RatingAggregator, StarBucket};

fn arb_entry() -> impl Strategy<Value = RatingEntry> {
    (1u8..=5, 1u32..=50).prop_map(|(rating, weight)| RatingEntry::new(rating, weight))
}

// ── Average stays within the observed ratings ────────────────────────────

proptest! {
    #[test]
    fn average_bounded_by_min_and_max(entries in prop::collection::vec(arb_entry(), 1..40)) {
        let avg = weighted_average(&entries).unwrap();
        let min = entries.iter().map(|e| e.rating).min().unwrap();
        let max = entries.iter().map(|e| e.rating).max().unwrap();
        prop_assert!(
            avg >= f64::from(min) - 1e-9 && avg <= f64::from(max) + 1e-9,
            "{} outside [{}, {}]",
            avg, min, max
        );
    }
}

// ── Uniform weights give the arithmetic mean ─────────────────────────────

proptest! {
    #[test]
    fn uniform_weight_is_arithmetic_mean(
        ratings in prop::collection::vec(1u8..=5, 1..40),
        weight in 1u32..100,
    ) {
        let entries: Vec<RatingEntry> =
            ratings.iter().map(|&r| RatingEntry::new(r, weight)).collect();
        let mean = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / ratings.len() as f64;
        let avg = weighted_average(&entries).unwrap();
        prop_assert!((avg - mean).abs() < 1e-9, "{} != {}", avg, mean);
    }
}

// ── Order does not matter ────────────────────────────────────────────────

proptest! {
    #[test]
    fn average_ignores_order(entries in prop::collection::vec(arb_entry(), 1..30)) {
        let mut reversed = entries.clone();
        reversed.reverse();
        let a = weighted_average(&entries).unwrap();
        let b = weighted_average(&reversed).unwrap();
        prop_assert!((a - b).abs() < 1e-9);
    }
}

// ── Star buckets are monotonic and in half-star steps ────────────────────

proptest! {
    #[test]
    fn star_bucket_monotonic(a in 0.0f64..=5.0, b in 0.0f64..=5.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(StarBucket::from_value(lo) <= StarBucket::from_value(hi));
    }

    #[test]
    fn star_bucket_in_range(value in 0.0f64..=5.0) {
        let percent = StarBucket::from_value(value).percent();
        prop_assert!((5..=50).contains(&percent), "percent {}", percent);
        prop_assert_eq!(percent % 5, 0);
    }
}

// ── Every aggregate names a label from the scale ─────────────────────────

proptest! {
    #[test]
    fn label_always_from_scale(entries in prop::collection::vec(arb_entry(), 1..30)) {
        let aggregator = RatingAggregator::default();
        let result = aggregator.aggregate(&entries);
        let label = result.bucket_label.unwrap();
        prop_assert!(aggregator.scale().labels().contains(&label));
    }
}
