//! OS user identity and avatar URL generation.

/// Username used when the environment does not name the current user.
pub const FALLBACK_USERNAME: &str = "user";

/// The OS user running the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    username: String,
}

impl OsIdentity {
    /// Identity with an explicit username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Look up the current user from `USER`, then `USERNAME` (Windows).
    pub fn current() -> Self {
        let username = ["USER", "USERNAME"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|name| !name.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_USERNAME.to_string());

        Self::new(username)
    }

    /// Login name.
    pub fn username(&self) -> &str {
        &self.username
    }
}

/// Avatar service used for ids that look like email addresses.
pub const GRAVATAR_BASE_URL: &str = "https://www.gravatar.com/avatar";

const GRAVATAR_QUERY: &str = "?d=wavatar&size=200";

/// Avatar URL for `id`.
///
/// The id is trimmed and lowercased, then MD5 hashed. Ids containing `@`
/// go to Gravatar, everything else to the service at `base_url`.
pub fn avatar_url_for(id: &str, base_url: &str) -> String {
    let id = id.trim().to_lowercase();
    let hash = format!("{:x}", md5::compute(id.as_bytes()));

    if id.contains('@') {
        format!("{GRAVATAR_BASE_URL}/{hash}{GRAVATAR_QUERY}")
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), hash)
    }
}
