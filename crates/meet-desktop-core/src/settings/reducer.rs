use crate::settings::{Settings, SettingsAction};

impl Settings {
    /// Apply one action, replacing exactly the field it targets.
    ///
    /// Unrecognized actions return the record unchanged.
    #[must_use]
    pub fn reduce(self, action: &SettingsAction) -> Self {
        match action {
            SettingsAction::SetAudioMuted {
                start_with_audio_muted,
            } => Self {
                start_with_audio_muted: *start_with_audio_muted,
                ..self
            },
            SettingsAction::SetAvatarUrl { avatar_url } => Self {
                avatar_url: avatar_url.clone(),
                ..self
            },
            SettingsAction::SetEmail { email } => Self {
                email: email.clone(),
                ..self
            },
            SettingsAction::SetName { name } => Self {
                name: name.clone(),
                ..self
            },
            SettingsAction::SetServerUrl { server_url } => Self {
                server_url: server_url.clone(),
                ..self
            },
            SettingsAction::SetVideoMuted {
                start_with_video_muted,
            } => Self {
                start_with_video_muted: *start_with_video_muted,
                ..self
            },
            SettingsAction::SetWindowAlwaysOnTop {
                window_always_on_top,
            } => Self {
                window_always_on_top: *window_always_on_top,
                ..self
            },
            SettingsAction::Unrecognized => self,
        }
    }
}

/// Reduce `action` over `state`, starting from `defaults` when there is no
/// state yet.
pub fn reduce(state: Option<Settings>, defaults: &Settings, action: &SettingsAction) -> Settings {
    state
        .unwrap_or_else(|| defaults.clone())
        .reduce(action)
}
