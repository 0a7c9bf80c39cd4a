//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{info, warn};

use stockquote_core::QuoteService;

use crate::error::ApiError;
use crate::tools::{tool_list, Tool, ToolList};

/// Query parameters the server sets itself on upstream calls.
const RESERVED_PARAMS: [&str; 3] = ["function", "symbol", "apikey"];

/// Application state.
pub struct AppState {
    /// Quote orchestration
    pub service: QuoteService,
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List the available tools.
pub async fn list_tools() -> Json<ToolList> {
    info!("MCP tools list requested");
    Json(tool_list())
}

/// Body of `POST /tools/call`.
#[derive(Debug, Deserialize)]
pub struct CallToolRequest {
    /// Tool name.
    pub name: Option<String>,
    /// Tool arguments.
    #[serde(default)]
    pub arguments: Option<Map<String, Value>>,
}

/// Invoke a tool and wrap its result in the MCP content envelope.
///
/// Tool failures are reported inside the envelope; only malformed requests
/// produce an error status.
pub async fn call_tool(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CallToolRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(request) = payload?;

    let name = request
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Tool name is required".to_string()))?;
    let arguments = request.arguments.unwrap_or_default();

    info!("MCP tool '{}' called with arguments: {:?}", name, arguments);

    let result = match Tool::from_name(name) {
        Some(Tool::Quote) => quote_flow(&state.service, symbol_argument(&arguments)?).await,
        Some(Tool::ValidateSymbol) => validate_symbol(&state.service, symbol_argument(&arguments)?),
        None => {
            warn!("Unknown tool called: {}", name);
            json!({
                "error": "Unknown tool",
                "message": format!("Tool '{}' is not supported", name),
                "tool": name,
            })
        }
    };

    Ok(Json(envelope(result)))
}

/// Direct quote by path, without the envelope.
pub async fn get_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Json<Value> {
    info!("Direct quote request for symbol: {}", symbol);
    Json(quote_flow(&state.service, Some(&symbol)).await)
}

/// Raw payload of any upstream function. Errors are returned out-of-band.
///
/// Query string parameters are forwarded upstream.
pub async fn get_stock_data(
    State(state): State<Arc<AppState>>,
    Path((function, symbol)): Path<(String, String)>,
    Query(extra_params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, ApiError> {
    if function.is_empty()
        || !function
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ApiError::BadRequest(format!(
            "Invalid function name: '{}'",
            function
        )));
    }
    if let Some((key, _)) = extra_params
        .iter()
        .find(|(key, _)| RESERVED_PARAMS.contains(&key.as_str()))
    {
        return Err(ApiError::BadRequest(format!(
            "Query parameter '{}' is reserved",
            key
        )));
    }

    let response = state
        .service
        .get_stock_data_with(&function, &symbol, &extra_params)
        .await?;

    Ok(Json(response.into()))
}

/// Wrap a tool result as MCP text content.
fn envelope(result: Value) -> Value {
    json!({
        "content": [
            {
                "type": "text",
                "text": result,
            }
        ]
    })
}

/// The `symbol` argument: absent and `null` are treated alike.
fn symbol_argument(arguments: &Map<String, Value>) -> Result<Option<&str>, ApiError> {
    match arguments.get("symbol") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(symbol)) => Ok(Some(symbol.as_str())),
        Some(_) => Err(ApiError::BadRequest(
            "Argument 'symbol' must be a string".to_string(),
        )),
    }
}

fn missing_symbol() -> Value {
    json!({
        "error": "Missing symbol",
        "message": "Symbol parameter is required",
    })
}

/// Shared quote flow for `tools/call` and the direct quote route.
async fn quote_flow(service: &QuoteService, symbol: Option<&str>) -> Value {
    let symbol = match symbol {
        Some(symbol) if !symbol.trim().is_empty() => symbol,
        _ => return missing_symbol(),
    };

    if !service.is_valid_symbol(symbol) {
        warn!("Invalid symbol format provided: {}", symbol);
        return json!({
            "error": "Invalid symbol format",
            "message": "Stock symbol must be 1-5 uppercase letters (e.g., 'IBM', 'AAPL')",
            "symbol": symbol,
        });
    }

    match service.get_quote(symbol).await {
        Ok(response) => {
            info!("Successfully retrieved stock quote for symbol: {}", symbol);
            response.into()
        }
        Err(e) => json!({
            "error": "Failed to retrieve stock quote",
            "message": e.to_string(),
            "symbol": symbol,
        }),
    }
}

/// Format check only; never calls upstream.
fn validate_symbol(service: &QuoteService, symbol: Option<&str>) -> Value {
    let Some(symbol) = symbol else {
        return missing_symbol();
    };

    info!("Validating symbol: {}", symbol);
    let valid = service.is_valid_symbol(symbol);
    let message = if valid {
        "Valid stock symbol format"
    } else {
        "Invalid stock symbol format. Must be 1-5 uppercase letters."
    };

    json!({
        "symbol": symbol,
        "valid": valid,
        "message": message,
    })
}
