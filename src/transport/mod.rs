//! Transport layer for talking HTTP to the Calendly API.
//!
//! This module provides types and traits for:
//! - Building HTTP requests ([`HttpRequest`])
//! - Handling HTTP responses ([`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])

mod client;
mod error;
mod types;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod types_tests;

pub use types::{FORM_URLENCODED, HttpClient, HttpRequest, HttpResponse, JSON};
pub use client::{ReqwestClient, TOKEN_HEADER};
pub use error::HttpError;
