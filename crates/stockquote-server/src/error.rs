//! Mapping of escaped errors onto HTTP responses.
//!
//! Tool routes report failures in-band; anything that escapes a handler as
//! an [`ApiError`] is rendered here with a status code.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, warn};

use stockquote_core::QuoteError;

/// Errors rendered out-of-band.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A domain error from the quote layer.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// The request itself was malformed.
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure; details are logged, not returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Quote(QuoteError::UpstreamApplication { .. })
            | ApiError::Quote(QuoteError::UpstreamHttp { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Quote(QuoteError::Network { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Quote(QuoteError::InvalidArgument { .. }) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body for this error.
    pub fn body(&self) -> Value {
        match self {
            ApiError::Quote(e) => match e {
                QuoteError::UpstreamApplication { .. } => json!({
                    "error": "AlphaVantage API Error",
                    "message": e.to_string(),
                    "code": e.code(),
                }),
                QuoteError::UpstreamHttp { status, .. } => json!({
                    "error": "HTTP Error",
                    "message": e.to_string(),
                    "code": e.code(),
                    "status": status,
                }),
                QuoteError::Network { .. } => json!({
                    "error": "Network Error",
                    "message": e.to_string(),
                }),
                QuoteError::InvalidArgument { .. } => json!({
                    "error": "Invalid Argument",
                    "message": e.to_string(),
                }),
            },
            ApiError::BadRequest(message) => json!({
                "error": "Invalid Argument",
                "message": message,
            }),
            ApiError::Internal(_) => json!({
                "error": "Internal Server Error",
                "message": "An unexpected error occurred",
            }),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), "request failed: {}", self);
        } else {
            warn!(status = status.as_u16(), "request rejected: {}", self);
        }
        (status, Json(self.body())).into_response()
    }
}

/// Render a handler panic as a 500.
pub fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("request handler panicked".to_string()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(QuoteError::upstream_application("Note")),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(QuoteError::upstream_http(404, "Not Found")),
                StatusCode::BAD_GATEWAY,
            ),
            (
                ApiError::from(QuoteError::network("request timed out")),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ApiError::from(QuoteError::invalid_argument("blank")),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Internal("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{err:?}");
        }
    }

    #[test]
    fn test_application_error_body() {
        let body = ApiError::from(QuoteError::upstream_application("Invalid API call.")).body();
        assert_eq!(body["error"], "AlphaVantage API Error");
        assert_eq!(body["message"], "Invalid API call.");
        assert_eq!(body["code"], "API_ERROR");
    }

    #[test]
    fn test_http_error_body_carries_status() {
        let body = ApiError::from(QuoteError::upstream_http(503, "Service Unavailable")).body();
        assert_eq!(body["error"], "HTTP Error");
        assert_eq!(body["status"], 503);
        assert_eq!(body["code"], "HTTP_ERROR");
    }

    #[test]
    fn test_panic_response_is_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_error_hides_details() {
        let body = ApiError::Internal("db password wrong".into()).body();
        assert_eq!(body["message"], "An unexpected error occurred");
    }
}
