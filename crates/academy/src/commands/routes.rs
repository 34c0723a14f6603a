//! `academy routes` command implementation.

use std::path::PathBuf;

use academy_config::{CliSettings, Config};
use academy_site::Site;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover academy.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config; default: embedded content).
    #[arg(long)]
    content_dir: Option<PathBuf>,
}

/// One row of the route listing.
#[derive(Debug, PartialEq, Eq)]
struct RouteRow {
    path: String,
    page: String,
    nav_title: Option<String>,
}

impl RoutesArgs {
    /// Execute the routes command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let site = Site::from_content_dir(config.site_resolved.content_dir)?;

        let rows = route_rows(&site);
        let width = rows.iter().map(|r| r.path.len()).max().unwrap_or(0);
        for row in &rows {
            let path = format!("{:width$}", row.path);
            let nav = row.nav_title.as_deref().unwrap_or("-");
            output.line(&format!(
                "{}  {:24}  {}",
                output.highlight(&path),
                row.page,
                output.dim(nav)
            ));
        }

        Ok(())
    }
}

/// Route table rows in table order.
fn route_rows(site: &Site) -> Vec<RouteRow> {
    let navigation = site.navigation();
    site.routes()
        .routes()
        .iter()
        .map(|route| RouteRow {
            path: route.path.clone(),
            page: route.page.label(),
            nav_title: navigation.find_item(&route.path).map(|i| i.title.clone()),
        })
        .collect()
}
