//! The AlphaVantage payload.
//!
//! AlphaVantage's response shape varies per function, so the payload is kept
//! as an untyped JSON object. Failures may arrive inside a 200 body under one
//! of the sentinel keys in [`SENTINEL_KEYS`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys upstream uses to report errors inside a successful response,
/// in priority order.
pub const SENTINEL_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Raw AlphaVantage response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteResponse(Map<String, Value>);

impl QuoteResponse {
    /// Wrap a decoded JSON object.
    pub fn new(data: Map<String, Value>) -> Self {
        Self(data)
    }

    /// Returns true if any sentinel error key is present.
    pub fn has_error(&self) -> bool {
        SENTINEL_KEYS.iter().any(|key| self.0.contains_key(*key))
    }

    /// The message under the highest-priority sentinel key, if any.
    ///
    /// Non-string values are rendered as compact JSON.
    pub fn error_message(&self) -> Option<String> {
        SENTINEL_KEYS
            .iter()
            .find_map(|key| self.0.get(*key))
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying object.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for QuoteResponse {
    fn from(data: Map<String, Value>) -> Self {
        Self(data)
    }
}

impl From<QuoteResponse> for Value {
    fn from(response: QuoteResponse) -> Self {
        Value::Object(response.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> QuoteResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_clean_payload_has_no_error() {
        let payload = response(json!({
            "Global Quote": {
                "01. symbol": "IBM",
                "05. price": "182.5000"
            }
        }));
        assert!(!payload.has_error());
        assert_eq!(payload.error_message(), None);
        assert_eq!(payload.get("Global Quote").unwrap()["01. symbol"], "IBM");
    }

    #[test]
    fn test_sentinel_priority() {
        let payload = response(json!({
            "Information": "info",
            "Note": "note",
            "Error Message": "error"
        }));
        assert!(payload.has_error());
        assert_eq!(payload.error_message().as_deref(), Some("error"));

        let payload = response(json!({ "Information": "info", "Note": "note" }));
        assert_eq!(payload.error_message().as_deref(), Some("note"));

        let payload = response(json!({ "Information": "premium endpoint" }));
        assert_eq!(payload.error_message().as_deref(), Some("premium endpoint"));
    }

    #[test]
    fn test_non_string_sentinel() {
        let payload = response(json!({ "Note": { "limit": 5 } }));
        assert_eq!(payload.error_message().as_deref(), Some(r#"{"limit":5}"#));
    }

    #[test]
    fn test_nested_values_survive_roundtrip() {
        let raw = json!({
            "Meta Data": { "2. Symbol": "IBM" },
            "Series": [1, 2.5, null, "x", { "deep": [true] }]
        });
        let payload = response(raw.clone());
        assert_eq!(Value::from(payload), raw);
    }
}
