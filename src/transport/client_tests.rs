//! Tests for `ReqwestClient`.
//!
//! No test here talks to a live Calendly endpoint.

use std::time::Duration;

use super::{HttpClient, HttpError, HttpRequest, ReqwestClient};

#[test]
fn authenticated_accepts_plain_token() {
    assert!(ReqwestClient::authenticated("abc123", Duration::from_secs(5)).is_ok());
}

#[test]
fn authenticated_rejects_token_with_newline() {
    let result = ReqwestClient::authenticated("abc\n123", Duration::from_secs(5));

    assert!(matches!(
        result,
        Err(HttpError::InvalidHeader { name: "X-TOKEN" })
    ));
}

#[test]
fn token_is_redacted_from_debug_output() {
    let client = ReqwestClient::authenticated("super-secret", Duration::from_secs(5)).unwrap();

    assert!(!format!("{client:?}").contains("super-secret"));
}

#[tokio::test]
async fn unreachable_host_is_transport_error_or_proxy_response() {
    let client = ReqwestClient::authenticated("t", Duration::from_secs(10)).unwrap();
    let url = url::Url::parse("http://invalid.invalid.invalid/").unwrap();

    let result = client.request(HttpRequest::new(http::Method::GET, url)).await;

    // Behind a proxy, DNS failure may come back as a 502 instead
    match result {
        Err(HttpError::Connection(_) | HttpError::Timeout) => {}
        Ok(resp) if !resp.status.is_success() => {}
        other => panic!("Expected transport error or proxy error response, got {other:?}"),
    }
}
