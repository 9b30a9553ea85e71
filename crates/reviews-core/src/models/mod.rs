mod rating;
mod review;
mod scale;
mod target;

pub use rating::RatingEntry;
pub use review::{ReviewRecord, SubmitterId};
pub use scale::RatingScale;
pub use target::TargetReference;
