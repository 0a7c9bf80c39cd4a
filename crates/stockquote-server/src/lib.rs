//! # Stockquote Server
//!
//! HTTP facade exposing AlphaVantage stock quotes as MCP-style tools.
//!
//! ## Routes
//!
//! - `GET /mcp/tools` - tool catalog
//! - `POST /mcp/tools/call` - invoke `quote` or `validate_symbol`
//! - `GET /mcp/quote/{symbol}` - quote without the tool envelope
//! - `GET /mcp/data/{function}/{symbol}` - raw upstream payload
//! - `GET /health` - liveness
//!
//! ## Usage
//!
//! ```ignore
//! use stockquote_server::{Server, ServerConfig};
//!
//! let server = Server::new(config)?;
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod tools;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use stockquote_core::{AlphaVantageClient, QuoteResult, QuoteService};

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// The stockquote server.
pub struct Server {
    config: ServerConfig,
    service: QuoteService,
}

impl Server {
    /// Create a server backed by the AlphaVantage client described in `config`.
    pub fn new(config: ServerConfig) -> QuoteResult<Self> {
        let client = AlphaVantageClient::new(config.alphavantage.clone())?;
        let service = QuoteService::new(Arc::new(client));
        Ok(Self::with_service(config, service))
    }

    /// Create a server over an existing service.
    pub fn with_service(config: ServerConfig, service: QuoteService) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.service.clone())
            .layer(CatchPanicLayer::custom(error::panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting stockquote server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
