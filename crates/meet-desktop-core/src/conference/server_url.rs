/// Scheme prepended to server URLs entered without one.
pub const DEFAULT_SCHEME: &str = "https://";

/// Path of the meeting API script served by every conference server.
pub const EXTERNAL_API_PATH: &str = "/external_api.js";

/// Trim `url` and give it an `https://` scheme if it has none.
///
/// Empty input stays empty. Applying this twice is the same as applying it
/// once.
pub fn normalize_server_url(url: &str) -> String {
    let url = url.trim();

    if !url.is_empty() && !url.contains("://") {
        return format!("{DEFAULT_SCHEME}{url}");
    }

    url.to_string()
}

/// URL of the external API script on `server_url`, or on
/// `default_server_url` when no server is given.
pub fn external_api_url(server_url: Option<&str>, default_server_url: &str) -> String {
    let server_url = match server_url {
        Some(url) if !url.is_empty() => url,
        _ => default_server_url,
    };

    format!("{}{EXTERNAL_API_PATH}", normalize_server_url(server_url))
}
