//! Successful operation results.

use serde_json::Value;

use crate::transport::HttpResponse;

/// Body of a successful API call.
///
/// Responses declared as JSON are decoded into an untyped [`Value`] and
/// returned as-is. Anything else, including a response with no
/// `Content-Type` at all, is handed back untouched as [`Payload::Raw`]:
/// it is the caller's contract to deal with it, and it is never turned
/// into an [`ApiError`](super::ApiError).
#[derive(Debug, Clone)]
pub enum Payload {
    /// Decoded JSON body
    Json(Value),
    /// Response that did not declare a JSON body
    Raw(HttpResponse),
}

impl Payload {
    /// Returns true if the body was decoded as JSON.
    #[must_use]
    pub const fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns the decoded JSON, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Looks up a top-level field of a JSON object payload.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(key))
    }
}
