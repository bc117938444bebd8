use crate::identity::{OsIdentity, avatar_url_for};

/// User preferences for the desktop shell.
///
/// Always fully populated: build one with [`Settings::initial`] at startup
/// and change it only through [`Settings::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Avatar shown to other participants.
    pub avatar_url: String,
    /// Email address shared with the conference.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Custom server URL (None = configured default server).
    pub server_url: Option<String>,
    /// Join conferences with the microphone muted.
    pub start_with_audio_muted: bool,
    /// Join conferences with the camera off.
    pub start_with_video_muted: bool,
    /// Keep the conference window above other windows.
    pub window_always_on_top: bool,
}

/// Configured values that seed a fresh [`Settings`] record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDefaults {
    /// Base URL of the avatar service.
    pub avatar_base_url: String,
    /// Initial always-on-top flag.
    pub window_always_on_top: bool,
}

impl Settings {
    /// Build the startup record from the OS identity and configured defaults.
    pub fn initial(identity: &OsIdentity, defaults: &SettingsDefaults) -> Self {
        Self {
            avatar_url: avatar_url_for(identity.username(), &defaults.avatar_base_url),
            email: String::new(),
            name: identity.username().to_string(),
            server_url: None,
            start_with_audio_muted: false,
            start_with_video_muted: false,
            window_always_on_top: defaults.window_always_on_top,
        }
    }
}
