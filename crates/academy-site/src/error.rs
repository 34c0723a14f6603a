//! Content loading errors.

use std::path::PathBuf;

/// Error raised while loading or parsing site content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Content file does not exist in the source.
    #[error("Content not found: {0}")]
    NotFound(String),
    /// I/O failure reading a content file from disk.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// YAML data file or frontmatter block failed to parse.
    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        /// Content path (e.g., `projects.yaml`).
        path: String,
        /// Underlying error.
        #[source]
        source: serde_yaml::Error,
    },
    /// Tutorial markdown has no frontmatter block.
    #[error("Missing frontmatter in {0}")]
    MissingFrontmatter(String),
    /// Two navigation sections share an id.
    #[error("Duplicate navigation section id: {0}")]
    DuplicateSection(String),
    /// Two routes share a path.
    #[error("Duplicate route path: {0}")]
    DuplicateRoute(String),
}

impl ContentError {
    /// Wrap a YAML error with the content path it came from.
    pub(crate) fn yaml(path: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.into(),
            source,
        }
    }
}
