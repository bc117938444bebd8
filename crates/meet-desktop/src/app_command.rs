use clap::Subcommand;

/// Commands accepted on the command line.
#[derive(Debug, Clone, Subcommand)]
pub enum AppCommand {
    /// Print the current settings.
    Show,
    /// Apply a settings action given as JSON, e.g.
    /// '{"type":"SET_NAME","name":"Ada"}'.
    Dispatch {
        /// The action in its JSON wire form.
        action: String,
    },
    /// Join a conference given as `room` or `server/room`.
    Join {
        /// Combined server URL and room name.
        input: String,
        /// Remember the server and log the URL without opening a browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Print the external API script URL of the current server.
    ApiUrl,
    /// Open a link in the default browser.
    Open {
        /// Link to open.
        link: String,
    },
}
