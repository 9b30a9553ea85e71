//! # reviews-validation
//!
//! The gate a submitted review passes before the host persists it:
//! honeypot and security token, content rules, ownership on edits, then
//! acceptance into a [`reviews_core::ReviewRecord`].

pub mod content;
pub mod identity;
pub mod pipeline;
pub mod profanity;
pub mod submission;

pub use content::{ContentRules, ValidatedContent};
pub use pipeline::SubmissionPipeline;
pub use profanity::{profanity_message, ProfanityFilter};
pub use submission::{
    AcceptedReview, RawSubmission, Rejection, SubmissionContext, SubmissionOutcome,
    SubmissionState,
};
