//! # Stockquote Core
//!
//! Domain layer for the stockquote MCP facade.
//!
//! This crate provides everything below the HTTP surface:
//!
//! - **Symbols**: format validation and normalization of ticker symbols
//! - **Responses**: the open-ended AlphaVantage payload and its embedded error keys
//! - **Client**: the outbound AlphaVantage call with a fixed timeout
//! - **Service**: validation + delegation + logging around the client
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stockquote_core::{AlphaVantageClient, AlphaVantageConfig, QuoteService};
//!
//! # async fn run() -> stockquote_core::QuoteResult<()> {
//! let config = AlphaVantageConfig::new("demo", "https://www.alphavantage.co");
//! let client = AlphaVantageClient::new(config)?;
//! let service = QuoteService::new(Arc::new(client));
//!
//! let quote = service.get_quote("ibm").await?;
//! println!("{:?}", quote.get("Global Quote"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod service;
pub mod symbol;

pub use client::{AlphaVantageClient, QuoteSource, GLOBAL_QUOTE_FUNCTION, UPSTREAM_TIMEOUT};
pub use config::AlphaVantageConfig;
pub use error::{QuoteError, QuoteResult};
pub use response::QuoteResponse;
pub use service::QuoteService;
pub use symbol::{is_valid_symbol, normalize_symbol, Symbol};
