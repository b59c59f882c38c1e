//! Error types for REST API operations

use thiserror::Error;

/// Errors that can occur during REST API operations
#[derive(Debug, Error)]
pub enum RestError {
    /// HTTP transport error (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reported by the exchange in a response body
    #[error("API: {message}")]
    Api {
        /// Message taken verbatim from the exchange's error envelope
        message: String,
    },

    /// The offer was already cancelled when the cancel request arrived
    #[error("API: Offer already cancelled")]
    AlreadyCancelled {
        /// Identifier of the offer the cancel was aimed at
        id: u64,
    },

    /// Response body could not be parsed into the expected shape
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but failed a plausibility check, and no error envelope was found
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl RestError {
    /// Creates an [`RestError::Api`] from any message-like value.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
