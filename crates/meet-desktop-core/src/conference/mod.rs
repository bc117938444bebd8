mod conference_target;
mod server_url;

pub use {
    conference_target::ConferenceTarget,
    server_url::{DEFAULT_SCHEME, EXTERNAL_API_PATH, external_api_url, normalize_server_url},
};
