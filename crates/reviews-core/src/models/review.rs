use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{RatingEntry, TargetReference};

/// Identity of an authenticated submitter. Anonymous submitters are
/// represented by `None` wherever a submitter is optional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmitterId(String);

impl SubmitterId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A review as seen by the core. Persistence and identity management
/// belong to the host; the core only validates and scores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Host-assigned primary key, `None` until persisted.
    pub id: Option<String>,
    pub target: TargetReference,
    pub submitter: Option<SubmitterId>,
    pub rating: u8,
    pub comment: String,
    pub weight: u32,
    pub submit_date: Option<DateTime<Utc>>,
    pub ip_address: Option<String>,
    /// Only public reviews count toward displayed ratings.
    pub is_public: bool,
}

impl ReviewRecord {
    pub fn entry(&self) -> RatingEntry {
        RatingEntry::new(self.rating, self.weight)
    }

    /// Fill in the submission date when the host did not set one.
    pub fn ensure_submit_date(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.submit_date.get_or_insert(now)
    }

    pub fn is_written_by(&self, submitter: Option<&SubmitterId>) -> bool {
        match (self.submitter.as_ref(), submitter) {
            (Some(author), Some(candidate)) => author == candidate,
            _ => false,
        }
    }
}
