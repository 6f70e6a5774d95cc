//! Error types for transport operations.

use thiserror::Error;

/// Error type for transport-level failures.
///
/// These are failures that happen before an HTTP status is available:
/// the request never produced a response the caller could inspect.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS failures and broken response bodies.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the timeout configured on the client.
    #[error("Request timed out")]
    Timeout,

    /// The request URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value (usually the auth token) cannot be sent over HTTP.
    #[error("Invalid header value for '{name}'")]
    InvalidHeader {
        /// Header name
        name: &'static str,
    },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Builder(#[source] Box<dyn std::error::Error + Send + Sync>),
}
