//! Production HTTP client implementation using reqwest.

use std::time::Duration;

use http::header::{HeaderMap, HeaderName, HeaderValue};

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};

/// Header carrying the Calendly API token.
pub const TOKEN_HEADER: &str = "X-TOKEN";

/// Production HTTP client using reqwest.
///
/// A thin wrapper around `reqwest::Client` that implements [`HttpClient`].
/// Headers configured on the inner client (such as the API token) are sent
/// with every request.
///
/// # Example
///
/// ```no_run
/// use calendly_hooks::transport::{ReqwestClient, HttpClient, HttpRequest};
/// use http::Method;
/// use std::time::Duration;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::authenticated("my-token", Duration::from_secs(30))?;
/// let url = Url::parse("https://calendly.com/api/v1/echo")?;
/// let response = client.request(HttpRequest::new(Method::GET, url)).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a client that sends `X-TOKEN: <token>` on every request.
    ///
    /// The token header is marked sensitive so it is redacted from debug output.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHeader`] if the token contains characters
    /// that are not allowed in a header value, or [`HttpError::Builder`] if
    /// reqwest fails to initialize (e.g. TLS backend unavailable).
    pub fn authenticated(token: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut value = HeaderValue::from_str(token).map_err(|_| HttpError::InvalidHeader {
            name: TOKEN_HEADER,
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-token"), value);

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::Builder(Box::new(e)))?;

        Ok(Self { inner })
    }
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder = self.inner.request(req.method, req.url.as_str());

        for (name, value) in &req.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        // Non-2xx statuses come back as Ok; reqwest only errors without a response
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                HttpError::Timeout
            } else if e.is_builder() {
                HttpError::InvalidUrl(e.to_string())
            } else {
                HttpError::Connection(Box::new(e))
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    HttpError::Timeout
                } else {
                    HttpError::Connection(Box::new(e))
                }
            })?
            .to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}
