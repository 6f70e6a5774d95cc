//! Command-line surface: argument parsing and command dispatch.

use std::time::Duration;

use calendly_hooks::api::{ApiClient, ApiError, Payload};
use calendly_hooks::transport::HttpClient;
use clap::{Parser, Subcommand};

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

/// Manage Calendly webhook subscriptions.
#[derive(Debug, Parser)]
#[command(name = "calendly-hooks", version, about)]
pub struct Args {
    /// API token, sent as the X-TOKEN header
    #[arg(short, long)]
    pub token: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: Action,
}

impl Args {
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Check that the token is accepted
    Echo,
    /// Subscribe a URL to webhook events
    Create {
        /// Callback URL that receives the events
        url: String,
        /// Event to subscribe to (invitee.created, invitee.canceled)
        #[arg(short, long = "event", required = true)]
        events: Vec<String>,
    },
    /// Show one webhook subscription
    Get { id: String },
    /// List webhook subscriptions
    List,
    /// Delete a webhook subscription
    Delete { id: String },
}

/// Failure of a single command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

/// Runs `action` against `client` and returns the text to print.
pub async fn perform<H: HttpClient>(
    client: &ApiClient<H>,
    action: &Action,
) -> Result<String, CommandError> {
    let payload = match action {
        Action::Echo => client.echo().await?,
        Action::Create { url, events } => client.create_webhook(url, events).await?,
        Action::Get { id } => client.get_webhook(id).await?,
        Action::List => client.list_webhooks().await?,
        Action::Delete { id } => {
            client.delete_webhook(id).await?;
            return Ok(format!("Deleted webhook {id}"));
        }
    };

    render(&payload)
}

fn render(payload: &Payload) -> Result<String, CommandError> {
    match payload {
        Payload::Json(value) => Ok(serde_json::to_string_pretty(value)?),
        Payload::Raw(response) => {
            tracing::warn!(
                status = %response.status,
                content_type = ?response.content_type(),
                "Response did not declare a JSON body"
            );
            Ok(String::from_utf8_lossy(&response.body).into_owned())
        }
    }
}
