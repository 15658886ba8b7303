//! Management API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the management API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Management API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Response body, usually a JSON `{"Error": ...}` document.
        message: String,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request URL could not be built from the configured base.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
