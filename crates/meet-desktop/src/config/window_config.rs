use crate::config::{default_always_on_top, default_always_on_top_key};

use serde::{Deserialize, Serialize};

/// Conference window configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Key under which the always-on-top flag is stored in the settings file.
    #[serde(default = "default_always_on_top_key")]
    pub always_on_top_key: String,

    /// Always-on-top flag for a fresh settings record.
    #[serde(default = "default_always_on_top")]
    pub always_on_top_default: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            always_on_top_key: default_always_on_top_key(),
            always_on_top_default: default_always_on_top(),
        }
    }
}
