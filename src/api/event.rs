//! Webhook event types.

use std::fmt;
use std::str::FromStr;

/// Event a webhook subscription can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebhookEvent {
    /// An invitee scheduled an event.
    InviteeCreated,
    /// An invitee canceled an event.
    InviteeCanceled,
}

impl WebhookEvent {
    /// Every event type the API accepts.
    pub const ALL: [Self; 2] = [Self::InviteeCreated, Self::InviteeCanceled];

    /// Returns the wire name used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InviteeCreated => "invitee.created",
            Self::InviteeCanceled => "invitee.canceled",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for WebhookEvent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Returned when a string is not a known event type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown webhook event '{0}'")]
pub struct UnknownEvent(String);

impl UnknownEvent {
    /// Returns the string that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl FromStr for WebhookEvent {
    type Err = UnknownEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEvent(s.to_string()))
    }
}
