//! Error types for REST API operations

use reqwest::StatusCode;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum BinanceError {
    /// Transport failed before a well-formed response was produced
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The exchange answered with a non-success status code
    ///
    /// The body is carried raw and uninterpreted; decoding exchange-specific
    /// error payloads is left to the caller.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Response status code
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The response body did not match the expected shape
    ///
    /// Distinct from [`BinanceError::Http`]: the server was reachable and
    /// answered with a success status, but the payload was unexpected.
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        /// Endpoint path the response came from
        endpoint: &'static str,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

impl BinanceError {
    /// Response status code, if the exchange produced one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::Decode { .. } => None,
        }
    }

    /// Returns true for 4xx responses
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    /// Returns true for 5xx responses
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_server_error())
    }

    /// Returns true when the payload, not the transport, was at fault
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

/// Result type for REST operations
pub type BinanceResult<T> = Result<T, BinanceError>;
