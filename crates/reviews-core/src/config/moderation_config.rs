use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModerationConfig {
    /// Publish accepted reviews without moderator approval. Default: false.
    pub publish_unmoderated: Option<bool>,
}

impl ModerationConfig {
    pub fn effective_publish_unmoderated(&self) -> bool {
        self.publish_unmoderated
            .unwrap_or(defaults::DEFAULT_PUBLISH_UNMODERATED)
    }
}
