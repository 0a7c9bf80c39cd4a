//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use stockquote_core::QuoteService;

use crate::handlers::{self, AppState};

/// Prefix under which the tool routes are mounted.
pub const MCP_PREFIX: &str = "/mcp";

/// Create the API router.
///
/// # Arguments
/// * `service` - The quote service backing the tool routes
pub fn create_router(service: QuoteService) -> Router {
    let state = Arc::new(AppState { service });

    let mcp = Router::new()
        .route("/tools", get(handlers::list_tools))
        .route("/tools/call", post(handlers::call_tool))
        .route("/quote/{symbol}", get(handlers::get_quote))
        .route("/data/{function}/{symbol}", get(handlers::get_stock_data));

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // MCP tools
        .nest(MCP_PREFIX, mcp)
        // State
        .with_state(state)
}
