use super::types::{ReviewPostedEvent, ReviewRejectedEvent};

/// Receiver of review lifecycle events. All methods default to no-ops so
/// handlers only implement what they care about.
pub trait ReviewEventHandler: Send + Sync {
    fn on_review_posted(&self, _event: &ReviewPostedEvent) {}

    fn on_review_rejected(&self, _event: &ReviewRejectedEvent) {}
}
