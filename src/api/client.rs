//! Calendly API client and its shared request pipeline.

use std::fmt::Display;
use std::time::Duration;

use http::Method;
use serde_json::Value;

use super::{ApiError, Payload, WebhookEvent};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestClient};

/// Root of the Calendly service.
pub const API_URL: &str = "https://calendly.com";

/// Versioned prefix shared by every endpoint.
const API_PREFIX: &str = "/api/v1/";

/// Timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const UNKNOWN_EVENTS: &str = "The specified event types do not exist";

/// Client for the Calendly v1 webhook API.
///
/// Every operation goes through one pipeline that builds the request,
/// hands it to the transport `H` and folds all failures into [`ApiError`].
/// The client holds no mutable state; concurrent use is as safe as the
/// transport it wraps.
///
/// # Example
///
/// ```no_run
/// use calendly_hooks::api::{ApiClient, WebhookEvent};
///
/// # async fn example() -> Result<(), calendly_hooks::api::ApiError> {
/// let client = ApiClient::new("my-token")?;
/// let hook = client
///     .create_webhook("https://example.com/hook", &[WebhookEvent::InviteeCreated])
///     .await?;
/// println!("created hook {:?}", hook.get("id"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<H> {
    transport: H,
}

impl ApiClient<ReqwestClient> {
    /// Creates a client that authenticates with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the token cannot be sent as a header or the
    /// HTTP client cannot be initialized.
    pub fn new(token: &str) -> Result<Self, ApiError> {
        Self::with_timeout(token, DEFAULT_TIMEOUT)
    }

    /// Creates a client that authenticates with `token` and gives up on
    /// requests after `timeout`.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::new`].
    pub fn with_timeout(token: &str, timeout: Duration) -> Result<Self, ApiError> {
        let transport = ReqwestClient::authenticated(token, timeout)
            .map_err(|e| ApiError::local(e.to_string()))?;
        Ok(Self::with_transport(transport))
    }
}

impl<H> ApiClient<H> {
    /// Wraps a pre-configured transport.
    ///
    /// The transport is expected to attach authentication itself.
    #[must_use]
    pub const fn with_transport(transport: H) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &H {
        &self.transport
    }
}

impl<H: HttpClient> ApiClient<H> {
    /// Checks that the configured token is accepted.
    ///
    /// A JSON body comes back as [`Payload::Json`]. [`Payload::Raw`] means the
    /// response did not declare `application/json` (for example a missing
    /// `Content-Type`), which breaks the API contract; it is handed back
    /// untouched rather than reported as an [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the token is rejected or the request fails.
    pub async fn echo(&self) -> Result<Payload, ApiError> {
        self.call_api(Method::GET, "echo", &[]).await
    }

    /// Subscribes `url` to the given events.
    ///
    /// Event names are validated before anything is sent; an unknown name
    /// fails without touching the network. See [`ApiClient::echo`] for what
    /// a [`Payload::Raw`] result means.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if an event is unknown, the remote rejects the
    /// subscription (409 when the URL is already registered) or the request
    /// fails.
    pub async fn create_webhook<S: AsRef<str>>(
        &self,
        url: &str,
        events: &[S],
    ) -> Result<Payload, ApiError> {
        let events = parse_events(events)?;

        let mut params = vec![("url", url)];
        params.extend(events.iter().map(|event| ("events[]", event.as_str())));

        self.call_api(Method::POST, "hooks", &params).await
    }

    /// Fetches one webhook subscription.
    ///
    /// A JSON body comes back as [`Payload::Json`]. [`Payload::Raw`] means the
    /// response did not declare `application/json` (for example a missing
    /// `Content-Type`), which breaks the API contract; it is handed back
    /// untouched rather than reported as an [`ApiError`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with code 404 if the subscription does not exist,
    /// or any other pipeline error.
    pub async fn get_webhook(&self, id: impl Display) -> Result<Payload, ApiError> {
        self.call_api(Method::GET, &format!("hooks/{id}"), &[]).await
    }

    /// Lists webhook subscriptions, as one page wrapped in `data`.
    ///
    /// See [`ApiClient::echo`] for what a [`Payload::Raw`] result means.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_webhooks(&self) -> Result<Payload, ApiError> {
        self.call_api(Method::GET, "hooks", &[]).await
    }

    /// Deletes a webhook subscription.
    ///
    /// Deleting a subscription that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] for any failure other than 404.
    pub async fn delete_webhook(&self, id: impl Display) -> Result<(), ApiError> {
        let endpoint = format!("hooks/{id}");
        match self.call_api(Method::DELETE, &endpoint, &[]).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                tracing::debug!(%id, "Webhook already absent, nothing to delete");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    async fn call_api(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Payload, ApiError> {
        let request = build_request(method, endpoint, params)?;

        tracing::debug!(method = %request.method, url = %request.url, "Sending API request");
        let response = self.transport.request(request).await?;
        tracing::debug!(status = %response.status, "Received API response");

        if response.status.is_client_error() {
            return Err(rejection(&response));
        }

        if response.status.is_server_error() {
            return Err(ApiError::transport(
                format_args!("server responded with {}", response.status),
                response.status.as_u16(),
            ));
        }

        decode(response)
    }
}

/// Builds the request for `endpoint`, encoding `params` by verb.
fn build_request(
    method: Method,
    endpoint: &str,
    params: &[(&str, &str)],
) -> Result<HttpRequest, ApiError> {
    let raw = format!("{API_URL}{API_PREFIX}{endpoint}");
    let url = url::Url::parse(&raw).map_err(|e| HttpError::InvalidUrl(format!("{raw}: {e}")))?;

    let request = HttpRequest::new(method, url);
    if request.method == Method::GET {
        Ok(request.with_query(params))
    } else {
        Ok(request.with_form(params))
    }
}

/// Turns a 4xx response into an error carrying the remote message.
fn rejection(response: &HttpResponse) -> ApiError {
    let code = response.status.as_u16();
    let raw = String::from_utf8_lossy(&response.body);

    if !response.is_json() {
        return ApiError::new(raw, code);
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(body) => {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| raw.into_owned(), ToString::to_string);
            tracing::debug!(code, %message, "API rejected request");
            ApiError::new(message, code)
        }
        Err(e) => ApiError::invalid_json(e),
    }
}

/// Decodes a successful response.
fn decode(response: HttpResponse) -> Result<Payload, ApiError> {
    if !response.is_json() {
        return Ok(Payload::Raw(response));
    }

    serde_json::from_slice(&response.body)
        .map(Payload::Json)
        .map_err(ApiError::invalid_json)
}

fn parse_events<S: AsRef<str>>(events: &[S]) -> Result<Vec<WebhookEvent>, ApiError> {
    events
        .iter()
        .map(|event| event.as_ref().parse::<WebhookEvent>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            tracing::debug!(event = e.name(), "Refusing unknown webhook event");
            ApiError::local(UNKNOWN_EVENTS)
        })
}
