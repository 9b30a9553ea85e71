//! Disallowed-term detection and the masked message shown to submitters.

pub mod filter;
pub mod message;

pub use filter::ProfanityFilter;
pub use message::{mask_term, profanity_message};
