//! Error types for calls against the storefront service
//!
//! Every failure the client can observe is classified into one of these
//! kinds so the UI can tell a dead server from a bad payload.

use thiserror::Error;

/// Errors returned by the API client
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Connection or transport failure (server down, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not finish within the configured timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// Server answered with a non-success status code
    #[error("Server returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Classify a reqwest transport error
    pub fn from_transport(err: reqwest::Error, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(timeout_secs)
        } else if err.is_decode() {
            ClientError::MalformedResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }

    /// Short label used in the notice banner
    pub fn kind_label(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "Network failure",
            ClientError::Timeout(_) => "Timed out",
            ClientError::Status { .. } => "Server error",
            ClientError::MalformedResponse(_) => "Unexpected response",
        }
    }
}
