//! AlphaVantage connection settings.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::UPSTREAM_TIMEOUT;

/// Default AlphaVantage endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// AlphaVantage API settings.
///
/// `Debug` never prints the API key.
#[derive(Clone, Serialize, Deserialize)]
pub struct AlphaVantageConfig {
    /// API key sent as the `apikey` query parameter.
    #[serde(default)]
    pub api_key: String,

    /// Scheme and host; `/query` is appended.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-call timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    UPSTREAM_TIMEOUT.as_secs()
}

impl Default for AlphaVantageConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl AlphaVantageConfig {
    /// Create settings with the default timeout.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// The per-call timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The full `/query` endpoint URL.
    pub fn query_url(&self) -> String {
        format!("{}/query", self.base_url.trim_end_matches('/'))
    }

    /// Names of required settings that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.api_key.trim().is_empty() {
            missing.push("api_key");
        }
        if self.base_url.trim().is_empty() {
            missing.push("base_url");
        }
        missing
    }
}

impl fmt::Debug for AlphaVantageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlphaVantageConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
