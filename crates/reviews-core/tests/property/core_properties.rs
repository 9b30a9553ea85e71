use proptest::prelude::*;

use reviews_core::{RatingEntry, RatingScale, TargetReference};

// ── Weights are never below one ──────────────────────────────────────────

proptest! {
    #[test]
    fn entry_weight_at_least_one(rating in any::<u8>(), weight in any::<u32>()) {
        let entry = RatingEntry::new(rating, weight);
        prop_assert!(entry.weight >= 1);
        prop_assert_eq!(entry.rating, rating);
    }
}

// ── A scale of K labels accepts exactly 1..=K ────────────────────────────

proptest! {
    #[test]
    fn scale_contains_exactly_its_levels(k in 1usize..20, rating in -50i64..50) {
        let scale = RatingScale::new((0..k).map(|i| format!("level {i}"))).unwrap();
        prop_assert_eq!(scale.contains(rating), rating >= 1 && rating <= k as i64);
        if let Ok(r) = u8::try_from(rating) {
            prop_assert_eq!(scale.label_for(r).is_some(), scale.contains(rating));
        }
    }
}

// ── Target references survive serialization ──────────────────────────────

proptest! {
    #[test]
    fn target_reference_json(kind in "[a-z]{1,8}\\.[a-z]{1,8}", key in "[A-Za-z0-9-]{1,12}") {
        let target = TargetReference::new(kind.clone(), key.clone());
        let json = serde_json::to_string(&target).unwrap();
        let back: TargetReference = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.target_type(), kind.as_str());
        prop_assert_eq!(back.target_key(), key.as_str());
        prop_assert_eq!(back.to_string(), format!("{kind}:{key}"));
    }
}
