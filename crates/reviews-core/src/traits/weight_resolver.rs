//! Per-submitter rating weights.
//!
//! By default every rating counts once. Hosts that trust some reviewers
//! more than others supply their own resolver; the core never looks the
//! weight up anywhere else.

use crate::constants::MIN_WEIGHT;
use crate::models::{SubmitterId, TargetReference};

/// Provider of the weight a submitter's rating carries for a target.
pub trait WeightResolver: Send + Sync {
    /// Weight for `submitter` rating `target`. Returns 1 unless overridden.
    fn resolve(&self, submitter: Option<&SubmitterId>, target: &TargetReference) -> u32 {
        let _ = (submitter, target);
        MIN_WEIGHT
    }

    /// The resolved weight, raised to at least 1.
    fn resolve_clamped(&self, submitter: Option<&SubmitterId>, target: &TargetReference) -> u32 {
        self.resolve(submitter, target).max(MIN_WEIGHT)
    }
}

/// Every rating counts once.
pub struct UnitWeightResolver;

impl WeightResolver for UnitWeightResolver {}

impl<F> WeightResolver for F
where
    F: Fn(Option<&SubmitterId>, &TargetReference) -> u32 + Send + Sync,
{
    fn resolve(&self, submitter: Option<&SubmitterId>, target: &TargetReference) -> u32 {
        self(submitter, target)
    }
}
