use std::collections::HashMap;

use reviews_core::config::ReviewsConfig;
use reviews_core::errors::ConfigError;

#[test]
fn defaults_match_legacy_settings() {
    let config = ReviewsConfig::default();
    assert_eq!(config.security.effective_max_age_secs(), 7200);
    assert_eq!(
        config.security.effective_key_salt(),
        "django.contrib.forms.CommentSecurityForm"
    );
    assert_eq!(config.content.effective_max_comment_length(), 3000);
    assert!(!config.content.effective_allow_profanities());
    assert!(!config.moderation.effective_publish_unmoderated());
    assert!(config.rating.effective_show_rating_text());
    assert_eq!(config.rating.effective_scale().unwrap().levels(), 5);
}

#[test]
fn from_toml_reads_all_sections() {
    let config = ReviewsConfig::from_toml(
        r#"
        [security]
        secret_key = "s3cret"
        max_age_secs = 600

        [rating]
        labels = ["Bad", "Okay", "Good"]
        show_rating_text = false

        [content]
        max_comment_length = 500
        profanities = ["rooster"]

        [moderation]
        publish_unmoderated = true
        "#,
    )
    .unwrap();

    assert_eq!(config.security.secret_key.as_deref(), Some("s3cret"));
    assert_eq!(config.security.effective_max_age_secs(), 600);
    assert_eq!(config.rating.effective_scale().unwrap().levels(), 3);
    assert!(!config.rating.effective_show_rating_text());
    assert_eq!(config.content.effective_max_comment_length(), 500);
    assert!(config.content.rejects_profanities());
    assert!(config.moderation.effective_publish_unmoderated());
}

#[test]
fn allow_profanities_disables_screening() {
    let config = ReviewsConfig::from_toml(
        r#"
        [content]
        allow_profanities = true
        profanities = ["rooster"]
        "#,
    )
    .unwrap();
    assert!(!config.content.rejects_profanities());
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = ReviewsConfig::from_toml("[security\nsecret_key = 1").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn zero_max_age_fails_validation() {
    let err = ReviewsConfig::from_toml("[security]\nmax_age_secs = 0").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "security.max_age_secs")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn blank_profanity_fails_validation() {
    let err = ReviewsConfig::from_toml("[content]\nprofanities = [\"  \"]").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn env_overrides_take_priority() {
    let mut config = ReviewsConfig::from_toml("[security]\nmax_age_secs = 600").unwrap();
    let env: HashMap<&str, &str> = [
        ("REVIEWS_SECRET_KEY", "from-env"),
        ("REVIEWS_COMPOSE_TIMEOUT", "60"),
        ("REVIEWS_MAX_LENGTH", "not-a-number"),
        ("REVIEWS_PUBLISH_UNMODERATED", "true"),
    ]
    .into_iter()
    .collect();

    ReviewsConfig::apply_overrides_from(&mut config, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(config.security.secret_key.as_deref(), Some("from-env"));
    assert_eq!(config.security.effective_max_age_secs(), 60);
    // Unparseable values are ignored.
    assert_eq!(config.content.effective_max_comment_length(), 3000);
    assert!(config.moderation.effective_publish_unmoderated());
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("reviews.toml"),
        "[content]\nmax_comment_length = 1200\n",
    )
    .unwrap();

    let config = ReviewsConfig::load(dir.path()).unwrap();
    assert_eq!(config.content.max_comment_length, Some(1200));
}

#[test]
fn load_without_project_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReviewsConfig::load(dir.path()).unwrap();
    assert_eq!(config.rating.effective_scale().unwrap().levels(), 5);
}

#[test]
fn from_file_missing_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReviewsConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn toml_round_trip_preserves_labels() {
    let config = ReviewsConfig::from_toml("[rating]\nlabels = [\"Low\", \"High\"]").unwrap();
    let text = config.to_toml().unwrap();
    let back = ReviewsConfig::from_toml(&text).unwrap();
    assert_eq!(back.rating.labels, vec!["Low", "High"]);
}

#[test]
fn debug_output_redacts_secret() {
    let config = ReviewsConfig::from_toml("[security]\nsecret_key = \"hunter2\"").unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("<redacted>"));
}
