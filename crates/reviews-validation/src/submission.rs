//! Submission inputs, lifecycle states and outcomes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use reviews_core::errors::{ContentError, ReviewsErrorCode, ReviewsResult};
use reviews_core::{ReviewRecord, ReviewsError, SubmitterId};

use crate::profanity::profanity_message;

/// Raw form fields as submitted. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSubmission {
    /// Id of the review being edited; absent or empty for a new review.
    pub id: Option<String>,
    pub content_type: Option<String>,
    pub object_pk: Option<String>,
    pub timestamp: Option<String>,
    pub security_hash: Option<String>,
    pub rating: Option<String>,
    pub comment: Option<String>,
    pub honeypot: Option<String>,
}

impl RawSubmission {
    /// Build from `(name, value)` form pairs. Unknown names are ignored and
    /// a repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (name, value) in pairs {
            let slot = match name.as_ref() {
                "id" => &mut raw.id,
                "content_type" => &mut raw.content_type,
                "object_pk" => &mut raw.object_pk,
                "timestamp" => &mut raw.timestamp,
                "security_hash" => &mut raw.security_hash,
                "rating" => &mut raw.rating,
                "comment" => &mut raw.comment,
                "honeypot" => &mut raw.honeypot,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        raw
    }

    /// Id of the review being edited, if this is an edit.
    pub fn review_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Who submitted, from where, and when.
#[derive(Debug, Clone)]
pub struct SubmissionContext {
    pub submitter: Option<SubmitterId>,
    pub now: DateTime<Utc>,
    pub ip_address: Option<String>,
}

impl SubmissionContext {
    pub fn new(submitter: Option<SubmitterId>, now: DateTime<Utc>) -> Self {
        Self {
            submitter,
            now,
            ip_address: None,
        }
    }

    /// Record the remote address. An empty address is treated as unknown.
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        let ip = ip_address.into();
        self.ip_address = if ip.is_empty() { None } else { Some(ip) };
        self
    }
}

/// Lifecycle of one submission. Failures short-circuit to `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    Received,
    SecurityChecked,
    ContentValidated,
    Accepted,
    Rejected,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::SecurityChecked => "security_checked",
            Self::ContentValidated => "content_validated",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submission that passed every check, ready for the host to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedReview {
    pub record: ReviewRecord,
    pub is_update: bool,
}

/// Why a submission was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Last state reached before the failing check.
    pub stage: SubmissionState,
    pub error: ReviewsError,
}

impl Rejection {
    pub fn code(&self) -> &'static str {
        self.error.error_code()
    }

    /// Message suitable for showing to the submitter. Disallowed terms are
    /// masked.
    pub fn user_message(&self) -> String {
        match &self.error {
            ReviewsError::Content(ContentError::ProfanityDetected { terms }) => {
                profanity_message(terms)
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected after {}: {}", self.stage, self.error)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Accepted(AcceptedReview),
    Rejected(Rejection),
}

impl SubmissionOutcome {
    pub fn state(&self) -> SubmissionState {
        match self {
            Self::Accepted(_) => SubmissionState::Accepted,
            Self::Rejected(_) => SubmissionState::Rejected,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn into_result(self) -> ReviewsResult<AcceptedReview> {
        match self {
            Self::Accepted(review) => Ok(review),
            Self::Rejected(rejection) => Err(rejection.error),
        }
    }
}
