//! Ownership checks for edits of an existing review.

use reviews_core::errors::IdentityError;
use reviews_core::{ReviewRecord, SubmitterId, TargetReference};

/// Check that `submitter` may edit review `review_id` for `target`.
///
/// `existing` is the stored review the host looked up for `review_id`.
/// Order: the review must exist, be written by the submitter, and belong
/// to the token's target. Anonymous submitters can never edit.
pub fn check_update<'a>(
    existing: Option<&'a ReviewRecord>,
    review_id: &str,
    target: &TargetReference,
    submitter: Option<&SubmitterId>,
) -> Result<&'a ReviewRecord, IdentityError> {
    let review = existing
        .filter(|r| r.id.as_deref().map_or(true, |id| id == review_id))
        .ok_or_else(|| IdentityError::ReviewNotFound {
            id: review_id.to_string(),
        })?;

    if !review.is_written_by(submitter) {
        return Err(IdentityError::UserSpoofed);
    }
    if review.target != *target {
        return Err(IdentityError::OwnershipSpoofed {
            stored: review.target.to_string(),
            claimed: target.to_string(),
        });
    }
    Ok(review)
}
