//! # reviews-core
//!
//! Foundation crate for the review core.
//! Defines the shared types, errors, config, events, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod models;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReviewsConfig;
pub use errors::{ReviewsError, ReviewsResult};
pub use models::{RatingEntry, RatingScale, ReviewRecord, SubmitterId, TargetReference};
pub use traits::{ProfanityChecker, UnitWeightResolver, WeightResolver};
