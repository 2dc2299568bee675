//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the Labnet backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Response body, possibly empty.
        message: String,
    },

    /// The response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}
