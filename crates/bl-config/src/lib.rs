//! Configuration management for the BESTLIB documentation site.
//!
//! Parses `bl-docs.toml` configuration files with serde and provides
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

use bl_site::{MatchPolicy, Taxonomy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override navigation taxonomy.
    pub taxonomy: Option<Taxonomy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "bl-docs.toml";

/// Upper bound for the "copied" acknowledgment duration.
const MAX_COPIED_FEEDBACK_MS: u64 = 60_000;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site identity used by the header and footer.
    pub site: SiteConfig,
    /// Sidebar navigation configuration.
    pub navigation: NavigationConfig,
    /// Code sample viewer configuration.
    pub code_samples: CodeSamplesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
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

/// Site identity.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Product name shown in the header brand and footer.
    pub title: String,
    /// Documented library version shown in the footer.
    pub version: String,
    /// Source repository linked from header and footer.
    pub repository_url: String,
    /// Copyright year shown in the footer.
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "BESTLIB".to_owned(),
            version: "1.0.0".to_owned(),
            repository_url: "https://github.com/NahiaEscalante/bestlib".to_owned(),
            copyright_year: 2025,
        }
    }
}

/// Navigation configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Navigation snapshot to serve.
    pub taxonomy: Taxonomy,
    /// Path comparison rule for routing and link highlighting.
    pub active_match: MatchPolicy,
}

/// Code sample viewer configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CodeSamplesConfig {
    /// How long the "Copied" acknowledgment stays visible.
    pub copied_feedback_ms: u64,
    /// Language assumed for code fences without an info string.
    pub default_language: String,
}

impl Default for CodeSamplesConfig {
    fn default() -> Self {
        Self {
            copied_feedback_ms: 2000,
            default_language: "python".to_owned(),
        }
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
        /// Error message (e.g., "${`DOCS_HOST`} not set").
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
    /// Otherwise, searches for `bl-docs.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
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
        if let Some(taxonomy) = settings.taxonomy {
            self.navigation.taxonomy = taxonomy;
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
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse, expand and validate configuration text.
    fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_site()?;
        self.validate_code_samples()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 lets the OS pick, which is never what a docs site wants
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate site identity.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        require_non_empty(&self.site.repository_url, "site.repository_url")?;
        require_http_url(&self.site.repository_url, "site.repository_url")?;
        Ok(())
    }

    /// Validate code sample settings.
    fn validate_code_samples(&self) -> Result<(), ConfigError> {
        let ms = self.code_samples.copied_feedback_ms;
        if ms == 0 {
            return Err(ConfigError::Validation(
                "code_samples.copied_feedback_ms must be greater than 0".to_owned(),
            ));
        }
        if ms > MAX_COPIED_FEEDBACK_MS {
            return Err(ConfigError::Validation(format!(
                "code_samples.copied_feedback_ms cannot exceed {MAX_COPIED_FEEDBACK_MS}"
            )));
        }
        require_non_empty(
            &self.code_samples.default_language,
            "code_samples.default_language",
        )?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.site.repository_url =
            expand::expand_env(&self.site.repository_url, "site.repository_url")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)), "got {err:?}");
        let msg = err.to_string();
        for expected in expected_substrings {
            assert!(msg.contains(expected), "'{msg}' should contain '{expected}'");
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.site.title, "BESTLIB");
        assert_eq!(config.navigation.taxonomy, Taxonomy::Sidebar);
        assert_eq!(config.navigation.active_match, MatchPolicy::Exact);
        assert_eq!(config.code_samples.copied_feedback_ms, 2000);
        assert_eq!(config.code_samples.default_language, "python");
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 7979);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "0.0.0.0"
port = 9000

[site]
title = "BESTLIB Next"
version = "2.0.0"
repository_url = "https://example.com/bestlib"
copyright_year = 2026

[navigation]
taxonomy = "routes"
active_match = "ignore-trailing-slash"

[code_samples]
copied_feedback_ms = 1500
default_language = "bash"
"#;
        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.site.title, "BESTLIB Next");
        assert_eq!(config.site.version, "2.0.0");
        assert_eq!(config.site.copyright_year, 2026);
        assert_eq!(config.navigation.taxonomy, Taxonomy::Routes);
        assert_eq!(
            config.navigation.active_match,
            MatchPolicy::IgnoreTrailingSlash
        );
        assert_eq!(config.code_samples.copied_feedback_ms, 1500);
        assert_eq!(config.code_samples.default_language, "bash");
    }

    #[test]
    fn test_parse_unknown_taxonomy_fails() {
        let err = Config::parse("[navigation]\ntaxonomy = \"mega-menu\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_parse_unknown_active_match_fails() {
        let err = Config::parse("[navigation]\nactive_match = \"prefix\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/bl-docs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_explicit_file_sets_config_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[server]\nport = 8123\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 8123);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_apply_cli_settings_multiple() {
        let mut config = Config::default();

        let overrides = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(9000),
            taxonomy: Some(Taxonomy::Routes),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.navigation.taxonomy, Taxonomy::Routes);
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::default();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7979);
        assert_eq!(config.navigation.taxonomy, Taxonomy::Sidebar);
    }

    #[test]
    fn test_expand_env_vars_server_host() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BL_DOCS_TEST_HOST", "0.0.0.0");
        }

        let toml = r#"
[server]
host = "${BL_DOCS_TEST_HOST}"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        let toml = r#"
[site]
repository_url = "${BL_DOCS_TEST_UNSET_REPO_URL}"
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "site.repository_url"));
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
        assert_validation_error(&config, &["server.port", "0"]);
    }

    #[test]
    fn test_validate_repository_url_invalid_scheme() {
        let mut config = Config::default();
        config.site.repository_url = "ftp://example.com".to_owned();
        assert_validation_error(&config, &["site.repository_url", "http"]);
    }

    #[test]
    fn test_validate_copied_feedback_zero() {
        let mut config = Config::default();
        config.code_samples.copied_feedback_ms = 0;
        assert_validation_error(&config, &["copied_feedback_ms", "greater than 0"]);
    }

    #[test]
    fn test_validate_copied_feedback_too_long() {
        let mut config = Config::default();
        config.code_samples.copied_feedback_ms = MAX_COPIED_FEEDBACK_MS + 1;
        assert_validation_error(&config, &["copied_feedback_ms", "exceed"]);
    }
}
