//! NetBox client errors

use crate::validate::ValidationErrors;
use thiserror::Error;

/// Errors that can occur when interacting with the NetBox API
#[derive(Debug, Error)]
pub enum NetBoxError {
    /// Invalid client construction arguments (empty base URL or token)
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// Input failed pre-flight validation; no request was sent
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Authentication failed (invalid token, expired, etc.)
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Resource not found (HTTP 404)
    #[error("not found: {0}")]
    NotFound(String),

    /// The API returned a status code the operation does not expect
    #[error("unexpected status code: {status} - {body}")]
    UnexpectedStatus {
        /// Raw HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// Network-level failure (timeout, connection refused)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed JSON in a success response
    #[error("error decoding response body: {source} - response (first 500 chars): {snippet}")]
    Decode {
        /// The underlying serde error
        source: serde_json::Error,
        /// First 500 characters of the offending body
        snippet: String,
    },
}
