//! Error types for quote retrieval.
//!
//! Every failure below the HTTP surface is one of four kinds. The server
//! maps each kind to a status code; the tool handlers render the `Display`
//! text in-band.

use thiserror::Error;

/// A specialized Result type for quote operations.
pub type QuoteResult<T> = Result<T, QuoteError>;

/// The error type for quote operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Caller-supplied input was rejected before any network I/O.
    #[error("{message}")]
    InvalidArgument {
        /// Description of the rejected input.
        message: String,
    },

    /// Upstream answered with a non-2xx status.
    #[error("HTTP error: {status} - {message}")]
    UpstreamHttp {
        /// HTTP status code returned by upstream.
        status: u16,
        /// Reason phrase or body excerpt.
        message: String,
    },

    /// Upstream answered 2xx but the body carried a sentinel error key.
    #[error("{message}")]
    UpstreamApplication {
        /// Value of the sentinel key.
        message: String,
    },

    /// Transport failure or timeout.
    #[error("{message}")]
    Network {
        /// Description of the failure.
        message: String,
    },
}

impl QuoteError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an upstream HTTP status error.
    pub fn upstream_http(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamHttp {
            status,
            message: message.into(),
        }
    }

    /// Create an upstream application error.
    pub fn upstream_application(message: impl Into<String>) -> Self {
        Self::UpstreamApplication {
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::UpstreamHttp { .. } => "HTTP_ERROR",
            Self::UpstreamApplication { .. } => "API_ERROR",
            Self::Network { .. } => "NETWORK_ERROR",
        }
    }

    /// True for failures that originate upstream of this service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamHttp { .. } | Self::UpstreamApplication { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QuoteError::upstream_http(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP error: 503 - Service Unavailable");

        let err = QuoteError::upstream_application("Invalid API call.");
        assert_eq!(err.to_string(), "Invalid API call.");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(QuoteError::invalid_argument("x").code(), "INVALID_ARGUMENT");
        assert_eq!(QuoteError::upstream_http(500, "x").code(), "HTTP_ERROR");
        assert_eq!(QuoteError::upstream_application("x").code(), "API_ERROR");
        assert_eq!(QuoteError::network("x").code(), "NETWORK_ERROR");
    }

    #[test]
    fn test_is_upstream() {
        assert!(QuoteError::upstream_http(404, "Not Found").is_upstream());
        assert!(QuoteError::upstream_application("Note").is_upstream());
        assert!(!QuoteError::network("timeout").is_upstream());
        assert!(!QuoteError::invalid_argument("blank").is_upstream());
    }
}
