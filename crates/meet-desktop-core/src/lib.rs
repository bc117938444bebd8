//! Meet-Desktop Core Library
//!
//! Settings state and conference URL handling for the Meet desktop shell.
//!
//! # Example
//!
//! ```
//! use meet_desktop_core::{
//!     ConferenceTarget, OsIdentity, Settings, SettingsAction, SettingsDefaults,
//! };
//!
//! let defaults = SettingsDefaults {
//!     avatar_base_url: "https://avatars.example.com".to_string(),
//!     window_always_on_top: true,
//! };
//! let settings = Settings::initial(&OsIdentity::new("ada"), &defaults);
//!
//! let target = ConferenceTarget::from_input("meet.example.com/standup");
//! if let Some(target) = target {
//!     let settings = settings.reduce(&SettingsAction::SetServerUrl {
//!         server_url: target.server_url.clone(),
//!     });
//!     assert_eq!(settings.server_url.as_deref(), Some("https://meet.example.com"));
//! }
//! ```

mod conference;
mod error;
mod identity;
mod platform;
mod settings;

pub use {
    conference::{
        ConferenceTarget, DEFAULT_SCHEME, EXTERNAL_API_PATH, external_api_url,
        normalize_server_url,
    },
    error::{Result as SettingsResult, SettingsError},
    identity::{FALLBACK_USERNAME, GRAVATAR_BASE_URL, OsIdentity, avatar_url_for},
    platform::{is_mac, open_external_link},
    settings::{
        FIXED_SETTINGS_KEYS, Settings, SettingsAction, SettingsDefaults, SettingsFile, reduce,
    },
};
