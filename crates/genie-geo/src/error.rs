//! Geocoding error types.

use thiserror::Error;

/// Errors that can occur when talking to the geocoding service.
#[derive(Debug, Error)]
pub enum GeoError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to interpret a response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The service returned 429. Searches are never retried.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the service asked us to wait.
        retry_after_secs: u64,
    },
}
