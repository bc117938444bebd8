mod avatar_config;
#[allow(clippy::module_inception)]
mod config;
mod server_config;
mod window_config;

pub(crate) use {
    avatar_config::AvatarConfig, config::Config, server_config::ServerConfig,
    window_config::WindowConfig,
};

pub(crate) const DEFAULT_SERVER_URL: &str = "https://meet.jit.si";
pub(crate) const DEFAULT_ALWAYS_ON_TOP_KEY: &str = "alwaysOnTopWindowEnabled";
pub(crate) const DEFAULT_ALWAYS_ON_TOP: bool = true;
pub(crate) const DEFAULT_AVATAR_BASE_URL: &str = "https://abotars.jitsi.net/meeting";

pub(crate) fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

pub(crate) fn default_always_on_top_key() -> String {
    DEFAULT_ALWAYS_ON_TOP_KEY.to_string()
}

pub(crate) fn default_always_on_top() -> bool {
    DEFAULT_ALWAYS_ON_TOP
}

pub(crate) fn default_avatar_base_url() -> String {
    DEFAULT_AVATAR_BASE_URL.to_string()
}
