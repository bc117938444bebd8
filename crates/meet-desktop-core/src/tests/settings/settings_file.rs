use super::sample_settings;
use crate::{FIXED_SETTINGS_KEYS, Settings, SettingsError, SettingsFile};

use std::fs;

const ALWAYS_ON_TOP_KEY: &str = "alwaysOnTopWindowEnabled";

fn defaults() -> Settings {
    Settings {
        avatar_url: "https://avatars.example.com/default".to_string(),
        email: String::new(),
        name: "default-user".to_string(),
        server_url: None,
        start_with_audio_muted: false,
        start_with_video_muted: false,
        window_always_on_top: true,
    }
}

/// WHAT: Loading a file that does not exist yields None
/// WHY: First launch has no stored settings
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_loading_then_none() {
    // Given: A path inside an empty directory
    let dir = tempfile::tempdir().unwrap();
    let file = SettingsFile::new(dir.path().join("settings.toml"), ALWAYS_ON_TOP_KEY).unwrap();

    // When: Loading
    let loaded = file.load(&defaults()).unwrap();

    // Then: Nothing is stored
    assert!(loaded.is_none());
}

/// WHAT: Saved settings load back unchanged
/// WHY: Preferences must survive a restart
#[test]
#[allow(clippy::unwrap_used)]
fn given_saved_settings_when_loading_then_same_record() {
    // Given: A saved record
    let dir = tempfile::tempdir().unwrap();
    let file = SettingsFile::new(dir.path().join("settings.toml"), ALWAYS_ON_TOP_KEY).unwrap();
    let settings = Settings {
        window_always_on_top: false,
        ..sample_settings()
    };
    file.save(&settings).unwrap();

    // When: Loading it back
    let loaded = file.load(&defaults()).unwrap();

    // Then: The record matches
    assert_eq!(loaded, Some(settings));
}

/// WHAT: The always-on-top flag is stored under the configured key
/// WHY: The storage key is chosen by configuration, not by the record
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_key_when_saving_then_flag_written_under_that_key() {
    // Given: A settings file with a custom key
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    let file = SettingsFile::new(&path, "pinWindow").unwrap();

    // When: Saving a record
    file.save(&sample_settings()).unwrap();

    // Then: The custom key holds the flag and the field name does not appear
    let table: toml::Table = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(table.get("pinWindow"), Some(&toml::Value::Boolean(true)));
    assert!(!table.contains_key("windowAlwaysOnTop"));
    assert_eq!(
        table.get("avatarURL").and_then(|v| v.as_str()),
        Some("https://avatars.example.com/abc")
    );
}

/// WHAT: Keys missing from the file take their default values
/// WHY: The record must always be fully populated
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_fields_defaulted() {
    // Given: A file with only a name and the always-on-top flag
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "name = \"Ada\"\nalwaysOnTopWindowEnabled = false\n").unwrap();
    let file = SettingsFile::new(&path, ALWAYS_ON_TOP_KEY).unwrap();

    // When: Loading
    let loaded = file.load(&defaults()).unwrap().unwrap();

    // Then: Stored keys win and the rest come from defaults
    assert_eq!(
        loaded,
        Settings {
            name: "Ada".to_string(),
            window_always_on_top: false,
            ..defaults()
        }
    );
}

/// WHAT: Invalid TOML is reported as a parse error
/// WHY: A corrupt file must not silently reset preferences
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_file_when_loading_then_parse_error() {
    // Given: A file that is not TOML
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "name = [unterminated").unwrap();
    let file = SettingsFile::new(&path, ALWAYS_ON_TOP_KEY).unwrap();

    // When: Loading
    let result = file.load(&defaults());

    // Then: A parse error is returned
    assert!(matches!(result, Err(SettingsError::Parse { .. })));
}

/// WHAT: Saving creates missing parent directories
/// WHY: The config directory may not exist on first launch
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_parent_when_saving_then_directory_created() {
    // Given: A path under a directory that does not exist yet
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.toml");
    let file = SettingsFile::new(&path, ALWAYS_ON_TOP_KEY).unwrap();

    // When: Saving
    file.save(&sample_settings()).unwrap();

    // Then: The file exists and no temp file is left behind
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: A non-boolean always-on-top value is reported as a parse error
/// WHY: A corrupt flag must not silently fall back to the default
#[test]
#[allow(clippy::unwrap_used)]
fn given_non_bool_always_on_top_when_loading_then_parse_error() {
    // Given: A file whose always-on-top flag is a string
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    fs::write(&path, "name = \"Ada\"\nalwaysOnTopWindowEnabled = \"no\"\n").unwrap();
    let file = SettingsFile::new(&path, ALWAYS_ON_TOP_KEY).unwrap();

    // When: Loading
    let result = file.load(&defaults());

    // Then: A parse error naming the key is returned
    assert!(
        matches!(
            &result,
            Err(SettingsError::Parse { reason, .. }) if reason.contains(ALWAYS_ON_TOP_KEY)
        ),
        "got {result:?}"
    );
}

/// WHAT: An always-on-top key equal to a fixed key is rejected
/// WHY: Saving would overwrite the other setting with the flag
#[test]
fn given_fixed_key_as_always_on_top_key_when_creating_then_reserved_key_error() {
    for key in FIXED_SETTINGS_KEYS {
        // Given/When: A settings file using a fixed key for the flag
        let result = SettingsFile::new("settings.toml", key);

        // Then: Creation fails
        assert!(
            matches!(result, Err(SettingsError::ReservedKey { .. })),
            "key {key}"
        );
    }
}

/// WHAT: Rendering uses the on-disk keys
/// WHY: Displayed settings must match the stored schema
#[test]
#[allow(clippy::unwrap_used)]
fn given_settings_when_rendering_then_stored_keys_used() {
    // Given: A settings file with a custom always-on-top key
    let file = SettingsFile::new("settings.toml", "pinWindow").unwrap();

    // When: Rendering a record
    let rendered = file.render(&sample_settings()).unwrap();

    // Then: The output uses the file keys
    let table: toml::Table = toml::from_str(&rendered).unwrap();
    assert_eq!(table.get("pinWindow"), Some(&toml::Value::Boolean(true)));
    assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("Ada"));
    assert!(table.contains_key("startWithAudioMuted"));
    assert!(!table.contains_key("window_always_on_top"));
    assert!(!table.contains_key("avatar_url"));
}
