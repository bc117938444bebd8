use crate::config::default_server_url;

use serde::{Deserialize, Serialize};

/// Conference server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server used when the settings name no custom server.
    #[serde(default = "default_server_url")]
    pub default_server_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_server_url: default_server_url(),
        }
    }
}
