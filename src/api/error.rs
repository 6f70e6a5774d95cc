//! The single error type surfaced by [`ApiClient`](super::ApiClient).

use thiserror::Error;

use crate::transport::HttpError;

/// Code used when a failure carries no numeric code of its own.
pub const NO_CODE: u16 = 0;

/// Code attached to response decoding failures.
pub const INVALID_JSON_CODE: u16 = 500;

/// Any failure of an API operation.
///
/// `code` is the HTTP status for remote rejections, [`INVALID_JSON_CODE`]
/// for undecodable bodies and [`NO_CODE`] for local validation and
/// transport failures that have no status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description
    pub message: String,
    /// HTTP-like status code
    pub code: u16,
}

impl ApiError {
    /// Creates an error with an explicit code.
    #[must_use]
    pub fn new(message: impl Into<String>, code: u16) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Creates a locally raised error that carries no code.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self::new(message, NO_CODE)
    }

    /// Creates a transport failure error.
    #[must_use]
    pub fn transport(description: impl std::fmt::Display, code: u16) -> Self {
        Self::new(format!("Failed to get Calendly data: {description}"), code)
    }

    /// Creates a decoding failure error.
    #[must_use]
    pub fn invalid_json(details: impl std::fmt::Display) -> Self {
        Self::new(format!("Invalid JSON: {details}"), INVALID_JSON_CODE)
    }

    /// Returns true if the remote reported that the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == http::StatusCode::NOT_FOUND.as_u16()
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::transport(err, NO_CODE)
    }
}
