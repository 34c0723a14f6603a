//! Configuration management for the academy site.
//!
//! Parses `academy.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `site.repository_url`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override the content directory.
    pub content_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "academy.toml";

/// Default site title shown in the header and the document title.
const DEFAULT_TITLE: &str = "ETHPH Academy";

/// Default repository link shown in the header.
const DEFAULT_REPOSITORY_URL: &str = "https://github.com/0xdanki/ethph-academy";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Playground configuration.
    pub playground: PlaygroundConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            playground: PlaygroundConfig::default(),
            site_resolved: SiteConfig::default(),
            config_path: None,
        }
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    title: Option<String>,
    repository_url: Option<String>,
    content_dir: Option<String>,
}

/// Resolved site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Brand title.
    pub title: String,
    /// Link target of the header "GitHub" button.
    pub repository_url: String,
    /// Directory to read content from instead of the embedded content.
    pub content_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            repository_url: DEFAULT_REPOSITORY_URL.to_owned(),
            content_dir: None,
        }
    }
}

/// Playground configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Simulated compile latency in milliseconds.
    pub compile_delay_ms: u64,
    /// Probability that a clean source still fails to compile.
    pub failure_rate: f64,
    /// Idle time after which a playground session is evicted.
    pub session_ttl_secs: u64,
    /// Upper bound on concurrently held playground sessions.
    pub max_sessions: usize,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            compile_delay_ms: 1500,
            failure_rate: 0.1,
            session_ttl_secs: 1800,
            max_sessions: 1000,
        }
    }
}

impl PlaygroundConfig {
    /// Simulated compile latency.
    #[must_use]
    pub fn compile_delay(&self) -> Duration {
        Duration::from_millis(self.compile_delay_ms)
    }

    /// Session idle timeout.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`server.host`").
        field: String,
        /// Error message (e.g., "${`ACADEMY_HOST`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `academy.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the merged configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(content_dir) = &settings.content_dir {
            self.site_resolved.content_dir = Some(content_dir.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_playground()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick a port, which is never what a config file means
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site_resolved.title, "site.title")?;
        require_non_empty(&self.site_resolved.repository_url, "site.repository_url")?;
        require_http_url(&self.site_resolved.repository_url, "site.repository_url")?;
        Ok(())
    }

    fn validate_playground(&self) -> Result<(), ConfigError> {
        const MAX_DELAY_MS: u64 = 60_000;

        let playground = &self.playground;
        if !(0.0..=1.0).contains(&playground.failure_rate) {
            return Err(ConfigError::Validation(
                "playground.failure_rate must be between 0 and 1".to_owned(),
            ));
        }
        if playground.compile_delay_ms > MAX_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "playground.compile_delay_ms cannot exceed {MAX_DELAY_MS}"
            )));
        }
        if playground.session_ttl_secs == 0 {
            return Err(ConfigError::Validation(
                "playground.session_ttl_secs must be greater than 0".to_owned(),
            ));
        }
        if playground.max_sessions == 0 {
            return Err(ConfigError::Validation(
                "playground.max_sessions must be greater than 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        if let Some(ref url) = self.site.repository_url {
            self.site.repository_url = Some(expand::expand_env(url, "site.repository_url")?);
        }

        Ok(())
    }

    /// Resolve raw site values, making `content_dir` relative to the config directory.
    fn resolve(&mut self, config_dir: &Path) {
        let defaults = SiteConfig::default();
        self.site_resolved = SiteConfig {
            title: self.site.title.clone().unwrap_or(defaults.title),
            repository_url: self
                .site
                .repository_url
                .clone()
                .unwrap_or(defaults.repository_url),
            content_dir: self.site.content_dir.as_deref().map(|d| config_dir.join(d)),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site_resolved, SiteConfig::default());
        assert_eq!(config.playground.compile_delay(), Duration::from_millis(1500));
        assert!((config.playground.failure_rate - 0.1).abs() < f64::EPSILON);
        assert_eq!(config.playground.session_ttl(), Duration::from_secs(1800));
        assert_eq!(config.playground.max_sessions, 1000);
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_playground_config() {
        let toml = r"
[playground]
compile_delay_ms = 250
failure_rate = 0.0
";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.playground.compile_delay_ms, 250);
        assert!(config.playground.failure_rate.abs() < f64::EPSILON);
        // Unset keys keep their defaults
        assert_eq!(config.playground.max_sessions, 1000);
    }

    #[test]
    fn test_resolve_site_paths() {
        let toml = r#"
[site]
title = "ETHPH Mindanao"
content_dir = "my-content"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve(Path::new("/project"));

        assert_eq!(config.site_resolved.title, "ETHPH Mindanao");
        assert_eq!(config.site_resolved.repository_url, DEFAULT_REPOSITORY_URL);
        assert_eq!(
            config.site_resolved.content_dir,
            Some(PathBuf::from("/project/my-content"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[server]
port = 8088

[site]
content_dir = "content"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.config_path, Some(path));
        assert_eq!(
            config.site_resolved.content_dir,
            Some(dir.path().join("content"))
        );
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/academy.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[playground]\nfailure_rate = 1.5\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("failure_rate"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            content_dir: Some(PathBuf::from("/srv/content")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.site_resolved.content_dir,
            Some(PathBuf::from("/srv/content"))
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert!(config.site_resolved.content_dir.is_none());
    }

    #[test]
    fn test_expand_env_vars_repository_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("ACADEMY_CONFIG_TEST_REPO", "https://github.com/eth-ph/davao");
        }

        let toml = r#"
[site]
repository_url = "${ACADEMY_CONFIG_TEST_REPO}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve(Path::new("/project"));

        assert_eq!(
            config.site_resolved.repository_url,
            "https://github.com/eth-ph/davao"
        );

        unsafe {
            std::env::remove_var("ACADEMY_CONFIG_TEST_REPO");
        }
    }

    // Validation tests

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(msg.contains(s), "Expected error to contain '{s}', got: {msg}");
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_server_host_empty() {
        let mut config = Config::default();
        config.server.host = String::new();
        assert_validation_error(&config, &["server.host", "empty"]);
    }

    #[test]
    fn test_validate_server_port_zero() {
        let mut config = Config::default();
        config.server.port = 0;
        assert_validation_error(&config, &["server.port"]);
    }

    #[test]
    fn test_validate_repository_url_scheme() {
        let mut config = Config::default();
        config.site_resolved.repository_url = "git@github.com:0xdanki/ethph-academy.git".to_owned();
        assert_validation_error(&config, &["repository_url", "http"]);
    }

    #[test]
    fn test_validate_failure_rate_range() {
        let mut config = Config::default();
        config.playground.failure_rate = -0.1;
        assert_validation_error(&config, &["failure_rate"]);
    }

    #[test]
    fn test_validate_compile_delay_cap() {
        let mut config = Config::default();
        config.playground.compile_delay_ms = 120_000;
        assert_validation_error(&config, &["compile_delay_ms", "60000"]);
    }

    #[test]
    fn test_validate_session_limits() {
        let mut config = Config::default();
        config.playground.max_sessions = 0;
        assert_validation_error(&config, &["max_sessions"]);

        let mut config = Config::default();
        config.playground.session_ttl_secs = 0;
        assert_validation_error(&config, &["session_ttl_secs"]);
    }
}
