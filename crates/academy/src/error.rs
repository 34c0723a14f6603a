//! CLI error types.

use academy_config::ConfigError;
use academy_server::{ExportError, ServerError};
use academy_site::ContentError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Server(#[from] ServerError),

    #[error("{0}")]
    Export(#[from] ExportError),
}
