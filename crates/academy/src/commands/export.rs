//! `academy export` command implementation.

use std::path::PathBuf;

use academy_config::{CliSettings, Config};
use academy_server::{export_site, shell_config};
use academy_site::Site;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Directory to write the static site to.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Path to configuration file (default: auto-discover academy.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config; default: embedded content).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Enable verbose output (one log line per written page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load, a page
    /// fails to render, or a file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = Site::from_content_dir(config.site_resolved.content_dir.clone())?;

        output.info(&format!("Exporting to {}", self.output_dir.display()));
        let summary = export_site(&site, &shell_config(&config), &self.output_dir)?;
        output.success(&format!(
            "Exported {} pages and {} assets",
            summary.pages, summary.assets
        ));

        Ok(())
    }
}
