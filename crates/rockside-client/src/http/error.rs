/*
[INPUT]:  Error sources (HTTP transport, API status, serialization, hex decoding, config)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Rockside client
#[derive(Error, Debug)]
pub enum RocksideError {
    /// HTTP transport failed (DNS, connection refused, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with an unexpected status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Hex input could not be decoded
    #[error("Invalid hex: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RocksideError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        RocksideError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            RocksideError::Api { status, .. } => Some(*status),
            RocksideError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Server reported that the resource already exists
    pub fn is_already_exists(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT.as_u16())
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, RocksideError::Config(_))
    }
}

/// Result type alias for Rockside operations
pub type Result<T> = std::result::Result<T, RocksideError>;
