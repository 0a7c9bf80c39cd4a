//! Quote orchestration: validation, normalization, delegation.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::client::QuoteSource;
use crate::error::{QuoteError, QuoteResult};
use crate::response::QuoteResponse;
use crate::symbol::{is_valid_symbol, Symbol};

/// Validates requests and delegates them to a [`QuoteSource`].
#[derive(Clone)]
pub struct QuoteService {
    source: Arc<dyn QuoteSource>,
}

impl QuoteService {
    /// Create a service over `source`.
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self { source }
    }

    /// Returns true if `symbol` has a valid ticker format.
    pub fn is_valid_symbol(&self, symbol: &str) -> bool {
        is_valid_symbol(symbol)
    }

    /// Latest quote for `symbol`.
    pub async fn get_quote(&self, symbol: &str) -> QuoteResult<QuoteResponse> {
        info!("Processing stock quote request for symbol: {}", symbol);

        let symbol = Symbol::parse(symbol).inspect_err(|e| {
            warn!("Invalid stock quote request: {}", e);
        })?;

        match self.source.global_quote(symbol.as_str()).await {
            Ok(response) => {
                info!("Successfully processed stock quote for symbol: {}", symbol);
                Ok(response)
            }
            Err(e) => {
                error!("Failed to process stock quote for symbol {}: {}", symbol, e);
                Err(e)
            }
        }
    }

    /// Raw payload of an arbitrary upstream function for `symbol`.
    pub async fn get_stock_data(&self, function: &str, symbol: &str) -> QuoteResult<QuoteResponse> {
        self.get_stock_data_with(function, symbol, &[]).await
    }

    /// Like [`get_stock_data`](Self::get_stock_data), forwarding extra query
    /// parameters upstream.
    pub async fn get_stock_data_with(
        &self,
        function: &str,
        symbol: &str,
        extra_params: &[(String, String)],
    ) -> QuoteResult<QuoteResponse> {
        info!(
            "Processing stock data request for function: {} and symbol: {}",
            function, symbol
        );

        if !is_valid_symbol(symbol) {
            warn!("Invalid stock symbol format: {}", symbol);
            return Err(QuoteError::invalid_argument("Invalid stock symbol format"));
        }
        let symbol = Symbol::parse(symbol)?;

        match self.source.fetch(function, symbol.as_str(), extra_params).await {
            Ok(response) => {
                info!(
                    "Successfully processed stock data for function: {} and symbol: {}",
                    function, symbol
                );
                Ok(response)
            }
            Err(e) => {
                error!(
                    "Failed to process stock data for function: {} and symbol {}: {}",
                    function, symbol, e
                );
                Err(e)
            }
        }
    }
}
