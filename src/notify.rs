// src/notify.rs
// =============================================================================
// The notification pipeline, one step after another:
//
//   fetch release -> normalize notes -> build blocks -> POST to Slack
//
// Each step finishes before the next starts, and the webhook is only called
// once the whole payload exists, so a failure never leaves a half-posted
// message behind.
// =============================================================================

use crate::config::Config;
use crate::error::Result;
use crate::github::fetch_release;
use crate::slack::{build_blocks, normalize, post_payload, Payload};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

// GitHub rejects API requests that carry no User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The one HTTP client used for both requests.
pub fn http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetches the release and lays out the Slack message, without posting it.
pub async fn prepare(client: &Client, config: &Config) -> Result<Payload> {
    let release = fetch_release(client, config).await?;

    let text = normalize(&release.body);
    let blocks = build_blocks(&release.url, &release.title, &text, config.chunk_limit);
    let payload = Payload { blocks };

    debug!(
        chars = text.chars().count(),
        sections = payload.body_sections(),
        "built Block Kit payload"
    );

    Ok(payload)
}

/// Runs the whole pipeline and posts the message.
pub async fn notify(client: &Client, config: &Config) -> Result<()> {
    let payload = prepare(client, config).await?;

    println!("Sending Block Kit message to Slack…");
    post_payload(client, &config.slack_webhook_url, &payload).await?;

    println!("Slack notification sent successfully.");
    Ok(())
}
