//! Static assets for the academy site.
//!
//! Provides a single API for accessing assets in both embedded and
//! filesystem modes:
//!
//! - **`embed` feature on**: Assets are compiled into the binary via `rust-embed`
//! - **`embed` feature off**: Assets are read from this crate's `static/` directory at runtime

use std::borrow::Cow;
#[cfg(not(feature = "embed"))]
use std::path::Path;

/// URL prefix the server mounts assets under.
pub const URL_PREFIX: &str = "/assets/";

/// Stylesheet file name.
pub const STYLESHEET: &str = "app.css";

/// Script file name.
pub const SCRIPT: &str = "app.js";

/// Embedded assets (only available with `embed` feature).
#[cfg(feature = "embed")]
#[derive(rust_embed::RustEmbed)]
#[folder = "static"]
#[prefix = ""]
struct Assets;

/// Directory for filesystem-based asset serving (dev mode).
#[cfg(not(feature = "embed"))]
const DEV_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Get an asset by path (relative to `static/`).
///
/// Returns the file contents if the asset exists, `None` otherwise.
#[cfg(feature = "embed")]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    Assets::get(path).map(|f| f.data)
}

/// Get an asset by path (relative to `static/`).
///
/// Returns the file contents if the asset exists, `None` otherwise. Paths
/// escaping the asset directory are rejected.
#[cfg(not(feature = "embed"))]
pub fn get(path: &str) -> Option<Cow<'static, [u8]>> {
    if path.split('/').any(|part| part == ".." || part.is_empty()) {
        return None;
    }
    let full_path = Path::new(DEV_DIR).join(path);
    std::fs::read(&full_path).ok().map(Cow::Owned)
}

/// Iterate all available asset paths.
#[cfg(feature = "embed")]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

/// Iterate all available asset paths.
#[cfg(not(feature = "embed"))]
pub fn iter() -> impl Iterator<Item = Cow<'static, str>> {
    walk_dir(Path::new(DEV_DIR)).into_iter().map(Cow::Owned)
}

/// Return the MIME type string for the given file path.
#[must_use]
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}

/// Public URL of an asset.
#[must_use]
pub fn url(path: &str) -> String {
    format!("{URL_PREFIX}{path}")
}

/// Recursively walk a directory and return paths relative to `base`.
#[cfg(not(feature = "embed"))]
fn walk_dir(base: &Path) -> Vec<String> {
    let mut result = Vec::new();
    walk_dir_inner(base, base, &mut result);
    result.sort();
    result
}

#[cfg(not(feature = "embed"))]
fn walk_dir_inner(base: &Path, dir: &Path, result: &mut Vec<String>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk_dir_inner(base, &path, result);
        } else if let Ok(rel) = path.strip_prefix(base) {
            // Normalize to forward slashes
            result.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}
