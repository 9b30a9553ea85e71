use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use reviews_core::errors::ContentError;
use reviews_core::{ReviewsError, TargetReference};
use reviews_guard::{SecretKey, TokenGuard};
use reviews_validation::{
    ContentRules, ProfanityFilter, RawSubmission, SubmissionContext, SubmissionPipeline,
};

const ISSUED_AT: i64 = 1_700_000_000;

fn pipeline() -> SubmissionPipeline {
    let guard = TokenGuard::new(SecretKey::from("prop-secret")).unwrap();
    SubmissionPipeline::new(guard, ContentRules::default())
}

// ── A filled honeypot always means a bot ─────────────────────────────────

proptest! {
    #[test]
    fn honeypot_always_bot_suspected(
        honeypot in ".{1,40}",
        rating in proptest::option::of(".{0,4}"),
        comment in proptest::option::of(".{0,80}"),
        timestamp in proptest::option::of("[0-9]{0,12}"),
        offset in 0i64..100_000,
    ) {
        let raw = RawSubmission {
            content_type: Some("testapp.article".to_string()),
            object_pk: Some("1".to_string()),
            timestamp,
            rating,
            comment,
            honeypot: Some(honeypot),
            ..Default::default()
        };
        let now = Utc.timestamp_opt(ISSUED_AT + offset, 0).unwrap();
        let outcome = pipeline().process(&raw, None, &SubmissionContext::new(None, now));
        prop_assert_eq!(
            outcome.into_result().unwrap_err(),
            ReviewsError::Content(ContentError::BotSuspected)
        );
    }
}

// ── Ratings are accepted exactly on the scale ────────────────────────────

proptest! {
    #[test]
    fn rating_accepted_iff_on_scale(value in -1000i64..1000) {
        let result = ContentRules::default().check_rating(Some(&value.to_string()));
        if (1..=5).contains(&value) {
            prop_assert_eq!(result, Ok(value as u8));
        } else {
            prop_assert_eq!(result, Err(ContentError::RatingOutOfRange { value, max: 5 }));
        }
    }
}

// ── Comment length boundary ──────────────────────────────────────────────

proptest! {
    #[test]
    fn comment_length_boundary(max in 1usize..200, extra in 0usize..3) {
        let rules = ContentRules::default().with_max_comment_length(max);
        let comment = "é".repeat(max + extra);
        let result = rules.check_comment(Some(&comment));
        if extra == 0 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(
                result,
                Err(ContentError::CommentTooLong { length: max + extra, max })
            );
        }
    }
}

// ── Profanity matching ignores case ──────────────────────────────────────

proptest! {
    #[test]
    fn profanity_found_in_any_case(
        prefix in "[a-z ]{0,10}",
        suffix in "[a-z ]{0,10}",
        upper in any::<bool>(),
    ) {
        let filter = ProfanityFilter::new(["rooster"]).unwrap();
        let word = if upper { "ROOSTER" } else { "Rooster" };
        let comment = format!("{prefix}{word}{suffix}");
        prop_assert_eq!(filter.find(&comment), vec!["rooster".to_string()]);
    }
}

// ── Valid submissions are accepted anywhere inside the window ────────────

proptest! {
    #[test]
    fn valid_submission_accepted_within_window(
        key in "[0-9]{1,6}",
        rating in 1u8..=5,
        offset in 0i64..=7200,
    ) {
        let pipeline = pipeline();
        let target = TargetReference::new("shop.product", key);
        let mut pairs = pipeline.guard().generate(&target, ISSUED_AT).to_form_fields();
        pairs.push(("rating", rating.to_string()));
        pairs.push(("comment", "fine".to_string()));
        let raw = RawSubmission::from_pairs(pairs);
        let now = Utc.timestamp_opt(ISSUED_AT + offset, 0).unwrap();

        let accepted = pipeline
            .process(&raw, None, &SubmissionContext::new(None, now))
            .into_result()
            .unwrap();
        prop_assert_eq!(accepted.record.rating, rating);
        prop_assert_eq!(accepted.record.target, target);
    }
}
