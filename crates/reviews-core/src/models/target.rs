use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the entity being reviewed: a type tag that is stable per
/// entity kind (e.g. `shop.product`) and an opaque primary key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetReference {
    target_type: String,
    target_key: String,
}

impl TargetReference {
    pub fn new(target_type: impl Into<String>, target_key: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            target_key: target_key.into(),
        }
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn target_key(&self) -> &str {
        &self.target_key
    }
}

impl fmt::Display for TargetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target_type, self.target_key)
    }
}
