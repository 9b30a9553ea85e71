use serde::{Deserialize, Serialize};

use reviews_core::errors::{ConfigError, ReviewsResult};
use reviews_core::RatingScale;

use crate::stars::StarBucket;

/// An average together with its display classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub average: Option<f64>,
    pub bucket_label: Option<String>,
    pub star_bucket: Option<StarBucket>,
    pub sample_count: usize,
}

impl AggregateResult {
    /// Result for a target with no ratings.
    pub fn empty() -> Self {
        Self {
            average: None,
            bucket_label: None,
            star_bucket: None,
            sample_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.average.is_none()
    }

    /// Average with one decimal place, e.g. `"3.7"`.
    pub fn average_display(&self) -> Option<String> {
        self.average.map(|avg| format!("{avg:.1}"))
    }
}

/// Classify an average value against `levels` labels, lowest first.
///
/// Fails with [`ConfigError`] when the label count differs from `levels` or
/// the scale is empty. The result has `sample_count` 1.
pub fn classify<S: AsRef<str>>(value: f64, levels: u8, labels: &[S]) -> ReviewsResult<AggregateResult> {
    if levels == 0 || labels.is_empty() {
        return Err(ConfigError::EmptyScale.into());
    }
    if labels.len() != usize::from(levels) {
        return Err(ConfigError::LabelCountMismatch {
            levels: usize::from(levels),
            labels: labels.len(),
        }
        .into());
    }
    let index = label_index(value, labels.len());
    Ok(AggregateResult {
        average: Some(value),
        bucket_label: Some(labels[index].as_ref().to_string()),
        star_bucket: Some(StarBucket::from_value(value)),
        sample_count: 1,
    })
}

/// Classify against an already validated scale.
pub(crate) fn classify_on(value: f64, scale: &RatingScale, sample_count: usize) -> AggregateResult {
    let labels = scale.labels();
    let index = label_index(value, labels.len());
    AggregateResult {
        average: Some(value),
        bucket_label: labels.get(index).cloned(),
        star_bucket: Some(StarBucket::from_value(value)),
        sample_count,
    }
}

/// Zero-based label index: the first label below 1, `round(value) - 1`
/// otherwise, clamped to the last label. Rounds half-to-even.
fn label_index(value: f64, label_count: usize) -> usize {
    let last = label_count.saturating_sub(1);
    if value.is_nan() || value < 1.0 {
        return 0;
    }
    let rounded = value.round_ties_even() as usize;
    rounded.saturating_sub(1).min(last)
}
