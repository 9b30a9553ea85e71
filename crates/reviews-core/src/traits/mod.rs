mod profanity_checker;
mod weight_resolver;

pub use profanity_checker::ProfanityChecker;
pub use weight_resolver::{UnitWeightResolver, WeightResolver};
