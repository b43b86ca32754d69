//! Configuration loading and validation.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::fetch::{ClientConfig, DEFAULT_UPSTREAM_URL};
use crate::palette::{ColorError, Palette};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error("Invalid palette: {0}")]
    InvalidColor(#[from] ColorError),
}

/// Upstream aggregation API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the aggregation backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_base_url() -> String {
    DEFAULT_UPSTREAM_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl UpstreamConfig {
    /// Build the client configuration, parsing the base URL.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let base_url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::ValidationError(format!("Invalid upstream base_url: {e}"))
        })?;

        let mut config = ClientConfig::new(base_url);
        config.timeout = Duration::from_secs(self.timeout_seconds);
        Ok(config)
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Team colour configuration.
///
/// Defaults to the league's six team colours; overriding `teams` replaces
/// the whole mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    /// Colour used for any manager not present in `teams`
    #[serde(default = "default_fallback_color")]
    pub fallback: String,

    /// Manager name to hex colour
    #[serde(default = "default_team_colors")]
    pub teams: HashMap<String, String>,
}

fn default_fallback_color() -> String {
    "#3B82F6".to_string()
}

fn default_team_colors() -> HashMap<String, String> {
    [
        ("Wirtzuose", "#F1C40F"),
        ("Diego FC", "#6B5B95"),
        ("FacePalmer FC", "#88B04B"),
        ("Put it in in", "#F7CAC9"),
        ("The Habibi Army", "#E67E22"),
        ("Guinness FC", "#955251"),
    ]
    .into_iter()
    .map(|(name, hex)| (name.to_string(), hex.to_string()))
    .collect()
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback_color(),
            teams: default_team_colors(),
        }
    }
}

impl PaletteConfig {
    /// Parse into a usable palette value.
    pub fn build(&self) -> Result<Palette, ConfigError> {
        Ok(Palette::from_hex_map(&self.teams, &self.fallback)?)
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub palette: PaletteConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            palette: PaletteConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.upstream.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Upstream timeout must be greater than 0".to_string(),
            ));
        }

        // Surface bad URLs and colours at startup, not on first request
        self.upstream.client_config()?;
        self.palette.build()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream.base_url, "http://localhost:8000");
        assert_eq!(config.palette.teams.len(), 6);
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_timeout() {
        let mut config = AppConfig::default();
        config.upstream.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AppConfig::default();
        config.upstream.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_color() {
        let mut config = AppConfig::default();
        config
            .palette
            .teams
            .insert("Broken FC".to_string(), "#XYZ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_minimal_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.upstream.timeout_seconds, 30);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_overrides() {
        let toml_str = r##"
            log_level = "debug"

            [server]
            port = 9090

            [upstream]
            base_url = "http://league.example.com/api/"

            [palette]
            fallback = "#111111"
            teams = { "Custom FC" = "#ABCDEF" }
        "##;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.upstream.base_url, "http://league.example.com/api/");

        let palette = config.palette.build().unwrap();
        assert_eq!(palette.color_for("Custom FC").to_string(), "#ABCDEF");
        assert_eq!(palette.color_for("Wirtzuose").to_string(), "#111111");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 3000\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_from_file_missing() {
        let path = PathBuf::from("/definitely/not/here.toml");
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.port, parsed.server.port);
    }
}
