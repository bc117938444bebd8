mod action;
mod reducer;
#[allow(clippy::module_inception)]
mod settings;
mod settings_file;

pub use {
    action::SettingsAction,
    reducer::reduce,
    settings::{Settings, SettingsDefaults},
    settings_file::{FIXED_SETTINGS_KEYS, SettingsFile},
};
