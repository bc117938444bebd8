use crate::{AppCommand, AppError, AppResult, config::Config};

use std::panic::Location;

use error_location::ErrorLocation;
use meet_desktop_core::{
    ConferenceTarget, OsIdentity, Settings, SettingsAction, SettingsFile, external_api_url,
    is_mac, open_external_link, reduce,
};
use tracing::{debug, info, instrument, warn};

/// Main application state.
///
/// Owns the settings record; every change goes through [`App::dispatch`]
/// and is persisted immediately.
pub struct App {
    pub(crate) config: Config,
    pub(crate) settings_file: SettingsFile,
    pub(crate) defaults: Settings,
    pub(crate) settings: Settings,
}

impl App {
    /// Build the application from configuration and the OS identity.
    ///
    /// Stored settings are loaded if present, otherwise the startup
    /// defaults are used.
    #[track_caller]
    #[instrument(skip(config))]
    pub(crate) fn new(config: Config, identity: &OsIdentity) -> AppResult<Self> {
        let defaults = Settings::initial(identity, &config.settings_defaults());
        let settings_file = config.settings_file()?;

        let settings = match settings_file.load(&defaults)? {
            Some(settings) => settings,
            None => {
                debug!("Using default settings");
                defaults.clone()
            }
        };

        info!(
            is_mac = is_mac(),
            settings_path = ?settings_file.path(),
            "Meet-Desktop starting"
        );

        Ok(Self {
            config,
            settings_file,
            defaults,
            settings,
        })
    }

    /// Execute one command-line command.
    pub(crate) fn run(mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::Show => println!("{}", self.render_settings()?),
            AppCommand::Dispatch { action } => self.dispatch_json(&action)?,
            AppCommand::Join { input, no_open } => {
                if let Some(url) = self.join(&input, !no_open)? {
                    println!("{url}");
                }
            }
            AppCommand::ApiUrl => println!("{}", self.api_url()),
            AppCommand::Open { link } => open_external_link(&link),
        }

        Ok(())
    }

    /// Apply an action to the settings and persist the result.
    #[track_caller]
    #[instrument(skip(self, action), fields(action = action.type_tag()))]
    pub(crate) fn dispatch(&mut self, action: &SettingsAction) -> AppResult<()> {
        let next = reduce(Some(self.settings.clone()), &self.defaults, action);

        if next == self.settings {
            debug!("Settings unchanged");
            return Ok(());
        }

        self.settings_file.save(&next)?;
        self.settings = next;

        info!("Settings updated");

        Ok(())
    }

    /// Decode an action from JSON and dispatch it.
    #[track_caller]
    pub(crate) fn dispatch_json(&mut self, json: &str) -> AppResult<()> {
        let action = SettingsAction::from_json(json).map_err(|e| AppError::InvalidAction {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        self.dispatch(&action)
    }

    /// Resolve `input` to a meeting URL, remembering any server it names.
    ///
    /// Returns `None` (and does not navigate) when the input has no room.
    #[instrument(skip(self))]
    pub(crate) fn join(&mut self, input: &str, open: bool) -> AppResult<Option<String>> {
        let Some(target) = ConferenceTarget::from_input(input) else {
            warn!("No room specified, not navigating");
            return Ok(None);
        };

        if target.server_url.is_some() {
            self.dispatch(&SettingsAction::SetServerUrl {
                server_url: target.server_url.clone(),
            })?;
        }

        let url = target.join_url(self.server_url());
        info!(room = %target.room, url = %url, "Joining conference");

        if open {
            open_external_link(&url);
        }

        Ok(Some(url))
    }

    /// External API script URL for the current server.
    pub(crate) fn api_url(&self) -> String {
        external_api_url(
            self.settings.server_url.as_deref(),
            &self.config.server.default_server_url,
        )
    }

    /// Current settings rendered with the same keys as the settings file.
    #[track_caller]
    pub(crate) fn render_settings(&self) -> AppResult<String> {
        Ok(self.settings_file.render(&self.settings)?)
    }

    fn server_url(&self) -> &str {
        match self.settings.server_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => &self.config.server.default_server_url,
        }
    }
}
