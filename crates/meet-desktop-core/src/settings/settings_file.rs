//! TOML persistence for the settings record.
//!
//! The always-on-top flag is stored under a key chosen by configuration, so
//! the file is handled as a table: the configured key is pulled out before
//! the remaining keys are decoded, and put back after they are encoded.

use crate::{SettingsError, SettingsResult, settings::Settings};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Keys with a fixed name in the settings file.
pub const FIXED_SETTINGS_KEYS: [&str; 6] = [
    "avatarURL",
    "email",
    "name",
    "serverURL",
    "startWithAudioMuted",
    "startWithVideoMuted",
];

/// On-disk shape of every settings key except the always-on-top flag.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
    #[serde(rename = "avatarURL", skip_serializing_if = "Option::is_none")]
    avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "serverURL", skip_serializing_if = "Option::is_none")]
    server_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_with_audio_muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_with_video_muted: Option<bool>,
}

/// A settings file on disk.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    always_on_top_key: String,
}

impl SettingsFile {
    /// Settings stored at `path`, with the always-on-top flag under
    /// `always_on_top_key`.
    ///
    /// Fails if the key is one of [`FIXED_SETTINGS_KEYS`].
    #[track_caller]
    pub fn new(
        path: impl Into<PathBuf>,
        always_on_top_key: impl Into<String>,
    ) -> SettingsResult<Self> {
        let always_on_top_key = always_on_top_key.into();

        if FIXED_SETTINGS_KEYS.contains(&always_on_top_key.as_str()) {
            return Err(SettingsError::ReservedKey {
                key: always_on_top_key,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            path: path.into(),
            always_on_top_key,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored record, or `None` if nothing has been saved yet.
    ///
    /// Keys missing from the file take their value from `defaults`.
    #[track_caller]
    #[instrument(skip(defaults))]
    pub fn load(&self, defaults: &Settings) -> SettingsResult<Option<Settings>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "No stored settings");
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;

        let mut table: toml::Table =
            toml::from_str(&contents).map_err(|e| SettingsError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let always_on_top = match table.remove(&self.always_on_top_key) {
            None => None,
            Some(toml::Value::Boolean(value)) => Some(value),
            Some(other) => {
                return Err(SettingsError::Parse {
                    path: self.path.clone(),
                    reason: format!(
                        "expected a boolean in {}, found {}",
                        self.always_on_top_key,
                        other.type_str()
                    ),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        let stored: StoredSettings = toml::Value::Table(table).try_into().map_err(
            |e: toml::de::Error| SettingsError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let settings = Settings {
            avatar_url: stored
                .avatar_url
                .unwrap_or_else(|| defaults.avatar_url.clone()),
            email: stored.email.unwrap_or_else(|| defaults.email.clone()),
            name: stored.name.unwrap_or_else(|| defaults.name.clone()),
            server_url: stored.server_url.or_else(|| defaults.server_url.clone()),
            start_with_audio_muted: stored
                .start_with_audio_muted
                .unwrap_or(defaults.start_with_audio_muted),
            start_with_video_muted: stored
                .start_with_video_muted
                .unwrap_or(defaults.start_with_video_muted),
            window_always_on_top: always_on_top.unwrap_or(defaults.window_always_on_top),
        };

        info!(path = ?self.path, "Settings loaded");

        Ok(Some(settings))
    }

    /// Render the record as it is stored on disk.
    #[track_caller]
    pub fn render(&self, settings: &Settings) -> SettingsResult<String> {
        let stored = StoredSettings {
            avatar_url: Some(settings.avatar_url.clone()),
            email: Some(settings.email.clone()),
            name: Some(settings.name.clone()),
            server_url: settings.server_url.clone(),
            start_with_audio_muted: Some(settings.start_with_audio_muted),
            start_with_video_muted: Some(settings.start_with_video_muted),
        };

        let mut table = toml::Table::try_from(&stored).map_err(|e| SettingsError::Serialize {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        table.insert(
            self.always_on_top_key.clone(),
            toml::Value::Boolean(settings.window_always_on_top),
        );

        toml::to_string_pretty(&table).map_err(|e| SettingsError::Serialize {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Save the record using an atomic write (temp file, then rename).
    #[track_caller]
    #[instrument(skip(self, settings), fields(path = ?self.path))]
    pub fn save(&self, settings: &Settings) -> SettingsResult<()> {
        let contents = self.render(settings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!(dir = ?parent, "Created settings directory");
            }
        }

        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;

        info!("Settings saved (atomic write)");

        Ok(())
    }
}
