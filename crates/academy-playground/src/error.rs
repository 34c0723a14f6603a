//! Playground errors.

use uuid::Uuid;

/// Error raised by playground operations.
#[derive(Debug, thiserror::Error)]
pub enum PlaygroundError {
    /// Template id is not in the registry.
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    /// Session does not exist or was evicted.
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),
}
