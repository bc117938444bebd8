use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Settings persistence errors with source location tracking.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Reading or writing the settings file failed.
    #[error("Settings IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The settings file exists but is not valid TOML.
    #[error("Failed to parse settings at {path:?}: {reason} {location}")]
    Parse {
        /// Path of the offending file.
        path: std::path::PathBuf,
        /// Description of the parse failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The configured always-on-top key collides with a fixed settings key.
    #[error("Always-on-top key {key:?} is already used by another setting {location}")]
    ReservedKey {
        /// The colliding key.
        key: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The settings record could not be rendered as TOML.
    #[error("Failed to serialize settings: {reason} {location}")]
    Serialize {
        /// Description of the serialization failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for SettingsError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        SettingsError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`SettingsError`].
pub type Result<T> = std::result::Result<T, SettingsError>;
