use serde::{Deserialize, Serialize};

use reviews_core::config::RatingConfig;
use reviews_core::errors::ConfigError;
use reviews_core::tracing_setup::events;
use reviews_core::{RatingEntry, RatingScale, ReviewRecord, WeightResolver};

use crate::average;
use crate::classify::{classify_on, AggregateResult};
use crate::stars::StarBucket;

/// Display values for a target's rating widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingSummary {
    pub review_count: usize,
    /// Average with one decimal place; `None` without reviews.
    pub average_display: Option<String>,
    /// Label text, only when rating text display is enabled.
    pub label: Option<String>,
    pub star: Option<StarBucket>,
}

/// Rating aggregator bound to a validated rating scale.
#[derive(Debug, Clone)]
pub struct RatingAggregator {
    scale: RatingScale,
    show_rating_text: bool,
}

impl RatingAggregator {
    pub fn new(scale: RatingScale) -> Self {
        Self {
            scale,
            show_rating_text: true,
        }
    }

    pub fn with_rating_text(mut self, show_rating_text: bool) -> Self {
        self.show_rating_text = show_rating_text;
        self
    }

    pub fn from_config(config: &RatingConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.effective_scale()?).with_rating_text(config.effective_show_rating_text()))
    }

    pub fn scale(&self) -> &RatingScale {
        &self.scale
    }

    pub fn show_rating_text(&self) -> bool {
        self.show_rating_text
    }

    /// Aggregate rating entries into an average and its classification.
    pub fn aggregate(&self, entries: &[RatingEntry]) -> AggregateResult {
        match average::weighted_average(entries) {
            Some(avg) => classify_on(avg, &self.scale, entries.len()),
            None => AggregateResult::empty(),
        }
    }

    /// Aggregate the public reviews among `records` with their stored
    /// weights. Unpublished reviews are not counted.
    pub fn aggregate_records(&self, records: &[ReviewRecord]) -> AggregateResult {
        let public = public_only(records);
        let result = self.aggregate_public(average::weighted_average_records(&public), public.len());
        events::ratings_aggregated(result.sample_count, result.average);
        result
    }

    /// Like [`aggregate_records`](Self::aggregate_records), but asks
    /// `resolver` for a fresh weight per review instead of the stored one.
    pub fn aggregate_records_reweighted(
        &self,
        records: &[ReviewRecord],
        resolver: &dyn WeightResolver,
    ) -> AggregateResult {
        let public = public_only(records);
        let result =
            self.aggregate_public(average::weighted_average_by(&public, resolver), public.len());
        events::ratings_aggregated(result.sample_count, result.average);
        result
    }

    fn aggregate_public(&self, average: Option<f64>, sample_count: usize) -> AggregateResult {
        match average {
            Some(avg) => classify_on(avg, &self.scale, sample_count),
            None => AggregateResult::empty(),
        }
    }

    /// Classify a single average value.
    pub fn classify(&self, value: f64) -> AggregateResult {
        classify_on(value, &self.scale, 1)
    }

    /// Classify one review's integer rating.
    pub fn classify_rating(&self, rating: u8) -> AggregateResult {
        self.classify(f64::from(rating))
    }

    /// Build the rating widget values for `entries`.
    pub fn summarize(&self, entries: &[RatingEntry]) -> RatingSummary {
        self.summary_of(&self.aggregate(entries))
    }

    /// Build the rating widget values from an aggregate.
    pub fn summary_of(&self, result: &AggregateResult) -> RatingSummary {
        RatingSummary {
            review_count: result.sample_count,
            average_display: result.average_display(),
            label: if self.show_rating_text {
                result.bucket_label.clone()
            } else {
                None
            },
            star: result.star_bucket,
        }
    }
}

fn public_only(records: &[ReviewRecord]) -> Vec<ReviewRecord> {
    records.iter().filter(|r| r.is_public).cloned().collect()
}

impl Default for RatingAggregator {
    fn default() -> Self {
        Self::new(RatingScale::default())
    }
}
