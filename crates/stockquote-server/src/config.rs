//! Server configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockquote_core::AlphaVantageConfig;

/// Environment variable overriding `alphavantage.api_key`.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Environment variable overriding `alphavantage.base_url`.
pub const BASE_URL_ENV: &str = "ALPHAVANTAGE_BASE_URL";

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`ServerConfig`].
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A required setting is blank.
    #[error("AlphaVantage API {field} is required")]
    Missing {
        /// Name of the blank setting.
        field: &'static str,
    },
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upstream API settings
    #[serde(default)]
    pub alphavantage: AlphaVantageConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            alphavantage: AlphaVantageConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply `ALPHAVANTAGE_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(key) = lookup(API_KEY_ENV) {
            self.alphavantage.api_key = key;
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.alphavantage.base_url = url;
        }
        self
    }

    /// Reject blank required settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing = self.alphavantage.missing_fields();
        if missing.contains(&"api_key") {
            return Err(ConfigError::Missing { field: "key" });
        }
        if missing.contains(&"base_url") {
            return Err(ConfigError::Missing { field: "base URL" });
        }
        Ok(())
    }
}
