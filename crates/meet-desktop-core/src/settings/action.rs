use serde::{Deserialize, Serialize};

/// Update actions understood by the settings reducer.
///
/// On the wire each action is a JSON object whose `type` field names the
/// action and whose payload field matches the settings key it replaces,
/// e.g. `{"type": "SET_NAME", "name": "Ada"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SettingsAction {
    /// Replace `start_with_audio_muted`.
    #[serde(rename = "SET_AUDIO_MUTED")]
    SetAudioMuted {
        /// New value.
        #[serde(rename = "startWithAudioMuted")]
        start_with_audio_muted: bool,
    },
    /// Replace `avatar_url`.
    #[serde(rename = "SET_AVATAR_URL")]
    SetAvatarUrl {
        /// New value.
        #[serde(rename = "avatarURL")]
        avatar_url: String,
    },
    /// Replace `email`.
    #[serde(rename = "SET_EMAIL")]
    SetEmail {
        /// New value.
        email: String,
    },
    /// Replace `name`.
    #[serde(rename = "SET_NAME")]
    SetName {
        /// New value.
        name: String,
    },
    /// Replace `server_url`. A missing or `null` payload clears it.
    #[serde(rename = "SET_SERVER_URL")]
    SetServerUrl {
        /// New value.
        #[serde(rename = "serverURL", default)]
        server_url: Option<String>,
    },
    /// Replace `start_with_video_muted`.
    #[serde(rename = "SET_VIDEO_MUTED")]
    SetVideoMuted {
        /// New value.
        #[serde(rename = "startWithVideoMuted")]
        start_with_video_muted: bool,
    },
    /// Replace `window_always_on_top`.
    #[serde(rename = "SET_ALWAYS_ON_TOP_WINDOW_ENABLED")]
    SetWindowAlwaysOnTop {
        /// New value.
        #[serde(rename = "windowAlwaysOnTop")]
        window_always_on_top: bool,
    },
    /// Any other `type` tag. The reducer passes the state through untouched.
    #[serde(other)]
    Unrecognized,
}

impl SettingsAction {
    /// Decode an action from its JSON wire form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Wire tag of this action, for logging.
    pub fn type_tag(&self) -> &'static str {
        match self {
            SettingsAction::SetAudioMuted { .. } => "SET_AUDIO_MUTED",
            SettingsAction::SetAvatarUrl { .. } => "SET_AVATAR_URL",
            SettingsAction::SetEmail { .. } => "SET_EMAIL",
            SettingsAction::SetName { .. } => "SET_NAME",
            SettingsAction::SetServerUrl { .. } => "SET_SERVER_URL",
            SettingsAction::SetVideoMuted { .. } => "SET_VIDEO_MUTED",
            SettingsAction::SetWindowAlwaysOnTop { .. } => "SET_ALWAYS_ON_TOP_WINDOW_ENABLED",
            SettingsAction::Unrecognized => "UNRECOGNIZED",
        }
    }
}
