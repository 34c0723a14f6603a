//! Error types for the HTTP server.

use std::path::PathBuf;

use academy_playground::PlaygroundError;
use academy_site::ContentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Playground session does not exist or was evicted.
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    /// Template id is not in the registry.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    /// A compile is already running for the session.
    #[error("Compile already in progress")]
    CompileInProgress,

    /// Content failed to load.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Invalid listen address.
    #[error("Invalid address {address}: {message}")]
    Address { address: String, message: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PlaygroundError> for ServerError {
    fn from(err: PlaygroundError) -> Self {
        match err {
            PlaygroundError::UnknownTemplate(id) => Self::UnknownTemplate(id),
            PlaygroundError::SessionNotFound(id) => Self::SessionNotFound(id),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::SessionNotFound(id) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Session not found", "session": id}),
            ),
            Self::UnknownTemplate(template) => (
                StatusCode::BAD_REQUEST,
                json!({"error": "Unknown template", "template": template}),
            ),
            Self::CompileInProgress => (
                StatusCode::CONFLICT,
                json!({"error": "Compile already in progress"}),
            ),
            Self::Content(_) | Self::Address { .. } | Self::Io(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Failure while rendering a page's content slot.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RenderError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Page renderer panicked: {0}")]
    Panic(String),
}

/// Error raised by the static export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A page rendered with an error panel.
    #[error("Failed to render {path}: {message}")]
    Render { path: String, message: String },

    /// A bundled asset could not be read.
    #[error("Missing asset: {0}")]
    MissingAsset(String),
}
