use crate::config::default_avatar_base_url;

use serde::{Deserialize, Serialize};

/// Avatar service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Base URL that generated avatar ids are appended to.
    #[serde(default = "default_avatar_base_url")]
    pub base_url: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            base_url: default_avatar_base_url(),
        }
    }
}
