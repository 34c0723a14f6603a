//! Static export.
//!
//! Renders every route with the default sidebar state into a directory that
//! any static host can serve: `/` becomes `index.html`, `/tutorials/setup`
//! becomes `tutorials/setup/index.html`, plus `404.html` and `assets/`.

use std::path::{Path, PathBuf};

use academy_site::Site;

use crate::error::ExportError;
use crate::render::{PageOptions, render_page};
use crate::views::ShellConfig;

/// Counts of written files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages: usize,
    pub assets: usize,
}

/// Render the whole site into `output_dir`.
///
/// Fails on the first page that renders with an error panel.
pub fn export_site(
    site: &Site,
    shell: &ShellConfig,
    output_dir: &Path,
) -> Result<ExportSummary, ExportError> {
    let sidebar = site.sidebar(None);
    let options = PageOptions::default();
    let mut summary = ExportSummary::default();

    for route in site.routes().routes() {
        let page = render_page(site, shell, &route.path, &sidebar, &options);
        if let Some(message) = page.error {
            return Err(ExportError::Render {
                path: route.path.clone(),
                message,
            });
        }
        let target = output_dir.join(page_file(&route.path));
        write_file(&target, page.html.as_bytes())?;
        tracing::debug!(path = %route.path, file = %target.display(), "Exported page");
        summary.pages += 1;
    }

    let not_found = render_page(site, shell, "/404", &sidebar, &options);
    write_file(&output_dir.join("404.html"), not_found.html.as_bytes())?;

    for asset in academy_assets::iter() {
        let content =
            academy_assets::get(&asset).ok_or_else(|| ExportError::MissingAsset(asset.to_string()))?;
        write_file(&output_dir.join("assets").join(&*asset), &content)?;
        summary.assets += 1;
    }

    tracing::info!(
        pages = summary.pages,
        assets = summary.assets,
        output = %output_dir.display(),
        "Exported site"
    );
    Ok(summary)
}

/// Output file for a route path, relative to the export root.
fn page_file(path: &str) -> PathBuf {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        PathBuf::from(trimmed).join("index.html")
    }
}

fn write_file(path: &Path, content: &[u8]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}
