//! Configuration management for wikimeta
//!
//! This module handles loading and validating configuration from environment
//! variables and TOML files.

use anyhow::{Context, Result};
use reqwest::header::HeaderValue;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Public DBPedia SPARQL endpoint
pub const DEFAULT_ENDPOINT: &str = "http://dbpedia.org/sparql/";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// DBPedia endpoint configuration
    pub dbpedia: DbpediaConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// DBPedia endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbpediaConfig {
    /// SPARQL endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent string
    pub user_agent: String,
}

impl Default for DbpediaConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            request_timeout_secs: 30,
            user_agent: format!("wikimeta/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl DbpediaConfig {
    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = DbpediaConfig::default();

        let endpoint = std::env::var("WIKIMETA_ENDPOINT").unwrap_or(defaults.endpoint);

        let request_timeout_secs = std::env::var("WIKIMETA_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let user_agent = std::env::var("WIKIMETA_USER_AGENT").unwrap_or(defaults.user_agent);

        let log_level =
            std::env::var("WIKIMETA_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("WIKIMETA_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            dbpedia: DbpediaConfig {
                endpoint,
                request_timeout_secs,
                user_agent,
            },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.dbpedia.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be greater than 0");
        }

        let endpoint = Url::parse(&self.dbpedia.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", self.dbpedia.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("endpoint must use http or https: {}", self.dbpedia.endpoint);
        }

        HeaderValue::from_str(&self.dbpedia.user_agent)
            .with_context(|| format!("Invalid user agent: {:?}", self.dbpedia.user_agent))?;

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("unknown log format: {}", self.logging.format);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dbpedia.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.dbpedia.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let mut config = Config::default();
        config.dbpedia.endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        config.dbpedia.endpoint = "ftp://dbpedia.org/sparql".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_user_agent_with_control_characters_rejected() {
        let mut config = Config::default();
        config.dbpedia.user_agent = "wikimeta\r\nX-Injected: 1".to_string();
        assert!(config.validate().is_err());

        config.dbpedia.user_agent = "wikimeta-test/1.0 (ops@example.org)".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "yaml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config::default();
        assert_eq!(config.dbpedia.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[dbpedia]\nrequest_timeout_secs = 5\n").unwrap();
        assert_eq!(config.dbpedia.request_timeout_secs, 5);
        assert_eq!(config.dbpedia.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.logging.format, "text");
    }
}
