//! Serve command - start the viewer server.

use std::path::PathBuf;

use clap::Args;
use qref_config::{CliSettings, Config};
use qref_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to config file (default: discover qref.toml in parent directories)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Language section to open by default (overrides config)
    #[arg(short, long)]
    language: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            default_language: self.language,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!(
            "Default language: {}",
            config.viewer.default_language
        ));
        output.info("Press Ctrl+C to stop");

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config)
            .await
            .map_err(|err| CliError::Server(err.to_string()))
    }
}
