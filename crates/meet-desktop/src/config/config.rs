//! Configuration management for meet-desktop.
//!
//! Handles loading and saving TOML configuration files with cross-platform
//! paths and atomic write operations.

use crate::{
    AppError, AppResult,
    config::{AvatarConfig, ServerConfig, WindowConfig},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use meet_desktop_core::{SettingsDefaults, SettingsFile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

const CONFIG_FILE_NAME: &str = "config.toml";
const SETTINGS_FILE_NAME: &str = "settings.toml";

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Conference server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Conference window configuration.
    #[serde(default)]
    pub window: WindowConfig,
    /// Avatar service configuration.
    #[serde(default)]
    pub avatar: AvatarConfig,

    /// Path this configuration was loaded from.
    #[serde(skip)]
    path: PathBuf,
}

impl Config {
    /// Load configuration from `path`, or from the platform config
    /// directory when no path is given. Writes a default file if none
    /// exists.
    #[track_caller]
    #[instrument]
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_dir()?.join(CONFIG_FILE_NAME),
        };

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let mut config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to parse config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
            config.path = config_path;

            // Rejects an always-on-top key that would overwrite another setting.
            config.settings_file()?;

            info!(config_path = ?config.path, "Configuration loaded");

            Ok(config)
        } else {
            info!(config_path = ?config_path, "No config found, creating default");
            let config = Config {
                path: config_path,
                ..Config::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self), fields(config_path = ?self.path))]
    pub fn save(&self) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                debug!(config_dir = ?parent, "Created config directory");
            }
        }

        // Atomic write: write to temp file then rename
        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("Configuration saved (atomic write)");

        Ok(())
    }

    /// Defaults for a fresh settings record.
    pub fn settings_defaults(&self) -> SettingsDefaults {
        SettingsDefaults {
            avatar_base_url: self.avatar.base_url.clone(),
            window_always_on_top: self.window.always_on_top_default,
        }
    }

    /// Settings file stored next to this configuration file.
    #[track_caller]
    pub fn settings_file(&self) -> AppResult<SettingsFile> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new(""));
        SettingsFile::new(
            dir.join(SETTINGS_FILE_NAME),
            self.window.always_on_top_key.clone(),
        )
        .map_err(|e| AppError::ConfigError {
            reason: format!("Invalid window.always_on_top_key: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn config_dir() -> AppResult<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("org", "meet-desktop", "Meet-Desktop").ok_or_else(|| {
                AppError::ConfigError {
                    reason: "Failed to get config directory".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(proj_dirs.config_dir().to_path_buf())
    }
}
