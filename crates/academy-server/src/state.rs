//! Application state.
//!
//! Shared state for all request handlers.

use academy_playground::SessionRegistry;
use academy_site::Site;

use crate::views::ShellConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Navigation, routes and content.
    pub(crate) site: Site,
    /// Header settings.
    pub(crate) shell: ShellConfig,
    /// Live playground sessions.
    pub(crate) sessions: SessionRegistry,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}
