//! HTTP server for the academy site.
//!
//! This crate serves:
//! - Server-rendered pages: the shell (header, sidebar, footer) around the
//!   page resolved from the route table, or a not-found page
//! - JSON API for the sidebar, the route table and playground sessions
//! - Static assets under `/assets/`
//!
//! It also provides [`export_site`], which renders every route to static files.
//!
//! # Quick Start
//!
//! ```ignore
//! use academy_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         port: 8080,
//!         ..ServerConfig::default()
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (academy-server)
//!                        │
//!                        ├─► GET <route path> ──► render_page ──► Site (academy-site)
//!                        │
//!                        ├─► /api/navigation, /api/routes ──► Site
//!                        │
//!                        ├─► /api/playground/* ──► SessionRegistry (academy-playground)
//!                        │
//!                        └─► /assets/* ──► academy-assets
//! ```

mod app;
mod error;
mod export;
mod handlers;
mod middleware;
mod render;
mod state;
mod static_files;
mod views;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use academy_playground::{MockCompiler, SessionRegistry};
use academy_site::Site;
use state::AppState;

pub use error::{ExportError, ServerError};
pub use export::{ExportSummary, export_site};
pub use views::ShellConfig;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Content directory (`None` serves the embedded content).
    pub content_dir: Option<PathBuf>,
    /// Header settings.
    pub shell: ShellConfig,
    /// Simulated compile latency.
    pub compile_delay: Duration,
    /// Probability that a clean source fails to compile.
    pub failure_rate: f64,
    /// Idle time after which a playground session is evicted.
    pub session_ttl: Duration,
    /// Maximum number of live playground sessions.
    pub max_sessions: usize,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let defaults = academy_config::Config::default();
        server_config_from_academy_config(&defaults, String::new())
    }
}

/// Run the server.
///
/// # Errors
///
/// Returns an error if the content fails to load or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let site = Site::from_content_dir(config.content_dir.clone())?;
    let state = Arc::new(app_state(site, &config));

    spawn_session_sweeper(Arc::clone(&state), config.session_ttl);

    let app = app::create_router(state);

    let address = format!("{}:{}", config.host, config.port);
    let addr = SocketAddr::from_str(&address).map_err(|e| ServerError::Address {
        address: address.clone(),
        message: e.to_string(),
    })?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn app_state(site: Site, config: &ServerConfig) -> AppState {
    let compiler = MockCompiler::with_failure_rate(config.compile_delay, config.failure_rate);
    AppState {
        site,
        shell: config.shell.clone(),
        sessions: SessionRegistry::new(compiler, config.session_ttl, config.max_sessions),
        version: config.version.clone(),
    }
}

/// Periodically drop idle playground sessions.
fn spawn_session_sweeper(state: Arc<AppState>, ttl: Duration) {
    let period = (ttl / 2).max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let evicted = state.sessions.evict_expired();
            if evicted > 0 {
                tracing::debug!(evicted, "Swept idle playground sessions");
            }
        }
    });
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from academy config.
///
/// # Arguments
///
/// * `config` - Loaded academy configuration
/// * `version` - Application version
#[must_use]
pub fn server_config_from_academy_config(
    config: &academy_config::Config,
    version: String,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        content_dir: config.site_resolved.content_dir.clone(),
        shell: shell_config(config),
        compile_delay: config.playground.compile_delay(),
        failure_rate: config.playground.failure_rate,
        session_ttl: config.playground.session_ttl(),
        max_sessions: config.playground.max_sessions,
        version,
    }
}

/// Header settings from academy config.
#[must_use]
pub fn shell_config(config: &academy_config::Config) -> ShellConfig {
    ShellConfig {
        title: config.site_resolved.title.clone(),
        repository_url: config.site_resolved.repository_url.clone(),
    }
}
