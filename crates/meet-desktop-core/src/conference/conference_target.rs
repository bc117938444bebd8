use crate::conference::normalize_server_url;

/// A room to join, optionally on a specific server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceTarget {
    /// Room name.
    pub room: String,
    /// Normalized server URL (None = use the configured server).
    pub server_url: Option<String>,
}

impl ConferenceTarget {
    /// Split a combined `server/room` string at its last slash.
    ///
    /// Returns `None` when no room name can be found; callers must not
    /// navigate in that case. A trailing slash (`"room/"`) makes the part
    /// before it the room, with no server.
    pub fn from_input(input: &str) -> Option<Self> {
        let (room, server_url) = match input.rfind('/') {
            None => (input, None),
            Some(index) => {
                let left = &input[..index];
                let right = &input[index + 1..];

                if right.is_empty() && !left.is_empty() {
                    (left, None)
                } else {
                    let server_url = normalize_server_url(left);
                    (right, (!server_url.is_empty()).then_some(server_url))
                }
            }
        };

        if room.is_empty() {
            return None;
        }

        Some(Self {
            room: room.to_string(),
            server_url,
        })
    }

    /// Full meeting URL, falling back to `default_server_url` when the
    /// target names no server.
    pub fn join_url(&self, default_server_url: &str) -> String {
        let server_url = match &self.server_url {
            Some(url) => url.clone(),
            None => normalize_server_url(default_server_url),
        };

        format!("{}/{}", server_url.trim_end_matches('/'), self.room)
    }
}
