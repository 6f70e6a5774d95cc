//! Calendly webhook API.
//!
//! This module provides:
//! - The API client ([`ApiClient`])
//! - The unified error type ([`ApiError`])
//! - Webhook event types ([`WebhookEvent`])
//! - Successful call results ([`Payload`])
//!
//! # Error Codes
//!
//! | Failure                            | `ApiError::code`      |
//! |------------------------------------|-----------------------|
//! | Unknown event type (no request)    | 0                     |
//! | Remote 4xx                         | HTTP status           |
//! | Remote 5xx                         | HTTP status           |
//! | Connection, timeout, bad URL       | 0                     |
//! | Body declared JSON but undecodable | 500                   |
//!
//! Deleting a subscription that is already gone (404) is not an error.

mod client;
mod error;
mod event;
mod payload;


pub use client::{API_URL, ApiClient, DEFAULT_TIMEOUT};
pub use error::{ApiError, INVALID_JSON_CODE, NO_CODE};
pub use event::{UnknownEvent, WebhookEvent};
pub use payload::Payload;
