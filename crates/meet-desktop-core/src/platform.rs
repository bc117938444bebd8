//! Host platform integration.

use tracing::{debug, warn};

/// Open `link` in the default browser.
///
/// Fire-and-forget: failures are logged, never returned.
pub fn open_external_link(link: &str) {
    match open::that(link) {
        Ok(()) => debug!(link, "Opened external link"),
        Err(e) => warn!(link, error = ?e, "Failed to open external link"),
    }
}

/// Whether the shell is running on macOS.
pub fn is_mac() -> bool {
    cfg!(target_os = "macos")
}
