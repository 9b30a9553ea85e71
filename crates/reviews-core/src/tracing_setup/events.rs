//! Structured log events for key review operations.
//!
//! Each function emits a `tracing` event with structured fields. Comment
//! text and secrets are never logged.

/// Log a security token being issued for a form.
pub fn token_issued(target: &str, timestamp: i64) {
    tracing::debug!(
        event = "token_issued",
        target_ref = %target,
        timestamp = timestamp,
        "security token issued"
    );
}

/// Log a security token failing verification.
pub fn token_rejected(target: &str, code: &str) {
    tracing::warn!(
        event = "token_rejected",
        target_ref = %target,
        code = %code,
        "security token rejected"
    );
}

/// Log an accepted submission.
pub fn submission_accepted(target: &str, rating: u8, weight: u32, is_update: bool) {
    tracing::info!(
        event = "submission_accepted",
        target_ref = %target,
        rating = rating,
        weight = weight,
        is_update = is_update,
        "review submission accepted"
    );
}

/// Log a rejected submission.
pub fn submission_rejected(stage: &str, code: &str) {
    tracing::warn!(
        event = "submission_rejected",
        stage = %stage,
        code = %code,
        "review submission rejected"
    );
}

/// Log an event handler panic.
pub fn handler_panicked(event_name: &str) {
    tracing::warn!(
        event = "handler_panicked",
        handler_event = %event_name,
        "review event handler panicked"
    );
}

/// Log a loaded configuration.
pub fn config_loaded(source: &str, levels: usize, max_age_secs: i64) {
    tracing::info!(
        event = "config_loaded",
        source = %source,
        rating_levels = levels,
        max_age_secs = max_age_secs,
        "review config loaded"
    );
}

/// Log a rating aggregation over stored reviews.
pub fn ratings_aggregated(sample_count: usize, average: Option<f64>) {
    tracing::debug!(
        event = "ratings_aggregated",
        sample_count = sample_count,
        average = ?average,
        "ratings aggregated"
    );
}
