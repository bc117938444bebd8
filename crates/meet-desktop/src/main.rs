//! Meet-Desktop: desktop shell settings and conference links.

mod app;
mod app_command;
mod config;
mod error;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
};

use crate::config::Config;

use std::path::PathBuf;

use clap::Parser;
use meet_desktop_core::OsIdentity;
use tracing::error;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "meet_desktop=info,meet_desktop_core=info";

#[derive(Parser)]
#[command(name = "meet-desktop")]
#[command(version)]
#[command(about = "Settings and conference links for the Meet desktop shell", long_about = None)]
struct Cli {
    /// Use this configuration file instead of the platform default.
    #[arg(long, env = "MEET_DESKTOP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: AppCommand,
}

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    // Identity is read once here and passed down.
    let identity = OsIdentity::current();

    let app = match App::new(config, &identity) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to load settings: {:?}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(cli.command) {
        error!(error = ?e, "Command failed");
        std::process::exit(1);
    }
}
