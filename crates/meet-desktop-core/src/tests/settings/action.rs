use crate::SettingsAction;

/// WHAT: Wire actions decode into their typed variants
/// WHY: The action protocol names payloads after the settings keys
#[test]
#[allow(clippy::unwrap_used)]
fn given_wire_actions_when_decoding_then_typed_variants_returned() {
    // Given/When: JSON actions using the wire tags
    let muted =
        SettingsAction::from_json(r#"{"type":"SET_AUDIO_MUTED","startWithAudioMuted":true}"#)
            .unwrap();
    let avatar =
        SettingsAction::from_json(r#"{"type":"SET_AVATAR_URL","avatarURL":"https://a/b"}"#)
            .unwrap();
    let on_top = SettingsAction::from_json(
        r#"{"type":"SET_ALWAYS_ON_TOP_WINDOW_ENABLED","windowAlwaysOnTop":false}"#,
    )
    .unwrap();

    // Then: Each decodes to the matching variant
    assert_eq!(
        muted,
        SettingsAction::SetAudioMuted {
            start_with_audio_muted: true
        }
    );
    assert_eq!(
        avatar,
        SettingsAction::SetAvatarUrl {
            avatar_url: "https://a/b".to_string()
        }
    );
    assert_eq!(
        on_top,
        SettingsAction::SetWindowAlwaysOnTop {
            window_always_on_top: false
        }
    );
}

/// WHAT: Unknown type tags decode as Unrecognized
/// WHY: Foreign actions reach the reducer and must pass through
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_type_when_decoding_then_unrecognized() {
    // Given/When: An action from another feature
    let action = SettingsAction::from_json(r#"{"type":"CONFERENCE_JOINED"}"#).unwrap();

    // Then: It is Unrecognized
    assert_eq!(action, SettingsAction::Unrecognized);
}

/// WHAT: A null or missing serverURL clears the server
/// WHY: Clearing the custom server falls back to the default one
#[test]
#[allow(clippy::unwrap_used)]
fn given_null_server_url_when_decoding_then_server_cleared() {
    // Given/When: SET_SERVER_URL with null and with no payload
    let null = SettingsAction::from_json(r#"{"type":"SET_SERVER_URL","serverURL":null}"#).unwrap();
    let missing = SettingsAction::from_json(r#"{"type":"SET_SERVER_URL"}"#).unwrap();

    // Then: Both clear the server URL
    assert_eq!(null, SettingsAction::SetServerUrl { server_url: None });
    assert_eq!(missing, SettingsAction::SetServerUrl { server_url: None });
}

/// WHAT: A known tag with a wrong payload type is rejected
/// WHY: Decode errors belong to the caller, not the reducer
#[test]
fn given_wrong_payload_type_when_decoding_then_error() {
    // Given/When: SET_VIDEO_MUTED with a string payload
    let result = SettingsAction::from_json(r#"{"type":"SET_VIDEO_MUTED","startWithVideoMuted":"yes"}"#);

    // Then: Decoding fails
    assert!(result.is_err());
}

/// WHAT: Unknown actions carrying payload fields decode as Unrecognized
/// WHY: Actions from other features always carry their own payloads
#[test]
#[allow(clippy::unwrap_used)]
fn given_unknown_type_with_payload_when_decoding_then_unrecognized() {
    // Given/When: A foreign action with payload fields
    let action =
        SettingsAction::from_json(r#"{"type":"CONFERENCE_JOINED","room":"x","count":2}"#).unwrap();

    // Then: It is Unrecognized
    assert_eq!(action, SettingsAction::Unrecognized);
}
