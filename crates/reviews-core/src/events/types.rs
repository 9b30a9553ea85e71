//! Event payload types.

use crate::models::{SubmitterId, TargetReference};

/// Payload for `on_review_posted`. Sent after a submission is accepted and
/// before the host persists it.
#[derive(Debug, Clone)]
pub struct ReviewPostedEvent {
    pub target: TargetReference,
    pub review_id: Option<String>,
    pub submitter: Option<SubmitterId>,
    pub rating: u8,
    pub weight: u32,
    pub is_update: bool,
    pub is_public: bool,
}

/// Payload for `on_review_rejected`.
#[derive(Debug, Clone)]
pub struct ReviewRejectedEvent {
    /// Target of a verified security token; `None` when the submission was
    /// rejected before its signature checked out.
    pub target: Option<TargetReference>,
    /// Name of the last stage the submission reached.
    pub stage: &'static str,
    pub code: &'static str,
    pub reason: String,
}
