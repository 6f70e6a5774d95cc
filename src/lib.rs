//! calendly-hooks: Calendly webhook API client
//!
//! A small client for the Calendly v1 REST API that checks tokens and
//! manages webhook subscriptions, folding every failure into one
//! [`api::ApiError`] with an HTTP-like status code.

pub mod api;
pub mod transport;
