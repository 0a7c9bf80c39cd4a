//! Tool catalog advertised to MCP clients.

use serde::Serialize;
use serde_json::{json, Value};

/// Name of the quote tool.
pub const QUOTE_TOOL: &str = "quote";

/// Name of the symbol validation tool.
pub const VALIDATE_SYMBOL_TOOL: &str = "validate_symbol";

/// One entry of the `GET /tools` response.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Tool name used in `tools/call`.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// JSON Schema of the `arguments` object.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Response of `GET /tools`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolList {
    /// Available tools.
    pub tools: Vec<ToolDescriptor>,
}

/// The tools this server supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Fetch a global quote.
    Quote,
    /// Check symbol format only.
    ValidateSymbol,
}

impl Tool {
    /// Look up a tool by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            QUOTE_TOOL => Some(Tool::Quote),
            VALIDATE_SYMBOL_TOOL => Some(Tool::ValidateSymbol),
            _ => None,
        }
    }

    /// Descriptor for this tool.
    pub fn descriptor(self) -> ToolDescriptor {
        match self {
            Tool::Quote => ToolDescriptor {
                name: QUOTE_TOOL,
                description: "Get real-time stock quote information for a given stock symbol using AlphaVantage API",
                input_schema: symbol_schema(
                    "Stock ticker symbol (e.g., 'IBM', 'AAPL', 'MSFT'). Must be 1-5 uppercase letters.",
                ),
            },
            Tool::ValidateSymbol => ToolDescriptor {
                name: VALIDATE_SYMBOL_TOOL,
                description: "Validate if a stock symbol has the correct format",
                input_schema: symbol_schema("Stock ticker symbol to validate"),
            },
        }
    }
}

fn symbol_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "symbol": {
                "type": "string",
                "description": description,
            }
        },
        "required": ["symbol"],
    })
}

/// All tool descriptors.
pub fn tool_list() -> ToolList {
    ToolList {
        tools: vec![Tool::Quote.descriptor(), Tool::ValidateSymbol.descriptor()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Tool::from_name("quote"), Some(Tool::Quote));
        assert_eq!(Tool::from_name("validate_symbol"), Some(Tool::ValidateSymbol));
        assert_eq!(Tool::from_name("QUOTE"), None);
    }

    #[test]
    fn test_tool_list_shape() {
        let value = serde_json::to_value(tool_list()).unwrap();
        let tools = value["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 2);

        for tool in tools {
            assert!(tool["description"].is_string());
            assert_eq!(tool["inputSchema"]["type"], "object");
            assert_eq!(tool["inputSchema"]["properties"]["symbol"]["type"], "string");
            assert_eq!(tool["inputSchema"]["required"], json!(["symbol"]));
        }
    }
}
