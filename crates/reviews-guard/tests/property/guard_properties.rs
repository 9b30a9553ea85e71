use proptest::prelude::*;
use reviews_core::errors::VerifyError;
use reviews_core::TargetReference;
use reviews_guard::{SecretKey, TokenGuard};

fn guard() -> TokenGuard {
    TokenGuard::new(SecretKey::from("property-secret")).unwrap()
}

proptest! {
    #[test]
    fn generated_tokens_verify_immediately(
        target_type in "[a-z]{1,8}\\.[a-z]{1,8}",
        target_key in "[A-Za-z0-9-]{1,12}",
        now in 0i64..4_000_000_000,
    ) {
        let guard = guard();
        let token = guard.generate(&TargetReference::new(target_type, target_key), now);
        prop_assert_eq!(guard.verify(&token, now, 7200), Ok(()));
        prop_assert_eq!(token.signature.len(), 40);
    }

    #[test]
    fn mutated_type_fails(
        target_type in "[a-z]{1,8}",
        suffix in "[a-z0-9]{1,4}",
        now in 0i64..4_000_000_000,
    ) {
        let guard = guard();
        let mut token = guard.generate(&TargetReference::new(target_type, "1"), now);
        token.target_type.push_str(&suffix);
        prop_assert_eq!(guard.verify(&token, now, 7200), Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn mutated_key_fails(
        target_key in "[0-9]{1,8}",
        suffix in "[0-9]{1,4}",
        now in 0i64..4_000_000_000,
    ) {
        let guard = guard();
        let mut token = guard.generate(&TargetReference::new("shop.product", target_key), now);
        token.target_key.push_str(&suffix);
        prop_assert_eq!(guard.verify(&token, now, 7200), Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn mutated_timestamp_fails(
        now in 0i64..4_000_000_000,
        delta in prop_oneof![-100_000i64..-1, 1i64..100_000],
    ) {
        let guard = guard();
        let mut token = guard.generate(&TargetReference::new("shop.product", "1"), now);
        token.timestamp += delta;
        prop_assert_eq!(guard.verify(&token, now, 7200), Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn mutated_signature_fails(
        now in 0i64..4_000_000_000,
        index in 0usize..40,
    ) {
        let guard = guard();
        let mut token = guard.generate(&TargetReference::new("shop.product", "1"), now);
        let mut bytes = token.signature.into_bytes();
        bytes[index] = if bytes[index] == b'0' { b'1' } else { b'0' };
        token.signature = String::from_utf8(bytes).unwrap();
        prop_assert_eq!(guard.verify(&token, now, 7200), Err(VerifyError::SignatureMismatch));
    }

    #[test]
    fn expiry_boundary_is_inclusive(
        issued in 0i64..4_000_000_000,
        max_age in 1i64..100_000,
    ) {
        let guard = guard();
        let token = guard.generate(&TargetReference::new("shop.product", "1"), issued);
        prop_assert_eq!(guard.verify(&token, issued + max_age, max_age), Ok(()));
        let past_window = guard.verify(&token, issued + max_age + 1, max_age);
        let is_expired = matches!(past_window, Err(VerifyError::Expired { .. }));
        prop_assert!(is_expired);
    }
}
