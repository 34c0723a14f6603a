//! `academy serve` command implementation.

use std::path::PathBuf;

use academy_config::{CliSettings, Config};
use academy_server::{run_server, server_config_from_academy_config};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover academy.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config; default: embedded content).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and session logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            content_dir: self.content_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        match &config.site_resolved.content_dir {
            Some(dir) => output.info(&format!("Content directory: {}", dir.display())),
            None => output.info("Content: embedded"),
        }
        output.info(&format!(
            "Playground: {} ms compile delay, {:.0}% random failures",
            config.playground.compile_delay_ms,
            config.playground.failure_rate * 100.0
        ));

        let server_config = server_config_from_academy_config(&config, version.to_owned());
        run_server(server_config).await?;

        Ok(())
    }
}
