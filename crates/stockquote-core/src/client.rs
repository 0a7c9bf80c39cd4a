//! AlphaVantage upstream client.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::config::AlphaVantageConfig;
use crate::error::{QuoteError, QuoteResult};
use crate::response::QuoteResponse;
use crate::symbol::normalize_symbol;

/// Upstream function returning the latest price and volume for one symbol.
pub const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";

/// End-to-end timeout for one upstream call.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of raw AlphaVantage payloads.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Call an upstream function for a symbol, with extra query parameters
    /// passed through verbatim.
    async fn fetch(
        &self,
        function: &str,
        symbol: &str,
        extra_params: &[(String, String)],
    ) -> QuoteResult<QuoteResponse>;

    /// Latest quote for a symbol.
    async fn global_quote(&self, symbol: &str) -> QuoteResult<QuoteResponse> {
        self.fetch(GLOBAL_QUOTE_FUNCTION, symbol, &[]).await
    }
}

/// HTTP client for the AlphaVantage `/query` endpoint.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    config: AlphaVantageConfig,
}

impl AlphaVantageClient {
    /// Create a client using the timeout from `config`.
    pub fn new(config: AlphaVantageConfig) -> QuoteResult<Self> {
        let timeout = config.timeout();
        Self::with_timeout(config, timeout)
    }

    /// Create a client with an explicit per-call timeout.
    pub fn with_timeout(config: AlphaVantageConfig, timeout: Duration) -> QuoteResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("stockquote/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| QuoteError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// The settings this client was built with.
    pub fn config(&self) -> &AlphaVantageConfig {
        &self.config
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageClient {
    async fn fetch(
        &self,
        function: &str,
        symbol: &str,
        extra_params: &[(String, String)],
    ) -> QuoteResult<QuoteResponse> {
        let function = function.trim();
        if function.is_empty() {
            return Err(QuoteError::invalid_argument(
                "Function cannot be null or empty",
            ));
        }
        if symbol.trim().is_empty() {
            return Err(QuoteError::invalid_argument(
                "Stock symbol cannot be null or empty",
            ));
        }

        let symbol = normalize_symbol(symbol);
        info!(function, symbol = %symbol, "calling AlphaVantage");

        let mut params: Vec<(&str, &str)> = vec![
            ("function", function),
            ("symbol", symbol.as_str()),
            ("apikey", self.config.api_key.as_str()),
        ];
        params.extend(extra_params.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let response = self
            .http
            .get(self.config.query_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                let err = transport_error(e, function, &symbol);
                error!(function, symbol = %symbol, "AlphaVantage request failed: {}", err);
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown status");
            error!(
                function,
                symbol = %symbol,
                status = status.as_u16(),
                "AlphaVantage returned HTTP error"
            );
            return Err(QuoteError::upstream_http(status.as_u16(), reason));
        }

        let data: Map<String, Value> = response.json().await.map_err(|e| {
            let err = QuoteError::network(format!(
                "Failed to read response for function {function} and symbol {symbol}: {}",
                e.without_url()
            ));
            error!(function, symbol = %symbol, "{}", err);
            err
        })?;

        let payload = QuoteResponse::new(data);
        if let Some(message) = payload.error_message() {
            warn!(
                function,
                symbol = %symbol,
                "AlphaVantage returned error: {}",
                message
            );
            return Err(QuoteError::upstream_application(message));
        }

        debug!(function, symbol = %symbol, keys = payload.as_map().len(), "AlphaVantage payload received");
        Ok(payload)
    }
}

/// Classify a reqwest send failure. The URL is dropped from the message
/// since it carries the API key.
fn transport_error(err: reqwest::Error, function: &str, symbol: &str) -> QuoteError {
    let cause = if err.is_timeout() {
        "request timed out".to_string()
    } else if err.is_connect() {
        format!("connection failed: {}", err.without_url())
    } else {
        err.without_url().to_string()
    };
    QuoteError::network(format!(
        "Failed to call function {function} for symbol {symbol}: {cause}"
    ))
}
