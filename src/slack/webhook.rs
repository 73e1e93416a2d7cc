// src/slack/webhook.rs
// =============================================================================
// Posts a Block Kit payload to a Slack incoming webhook.
//
// Incoming webhooks answer 200 with the body "ok" on success. Anything else
// (400 "invalid_blocks", 404 "no_service", ...) is reported with the status
// and the body Slack sent back.
// =============================================================================

use super::blocks::Payload;
use crate::error::{NotifyError, Result};
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Sends `payload` as JSON to `webhook_url`. Not retried.
pub async fn post_payload(client: &Client, webhook_url: &str, payload: &Payload) -> Result<()> {
    debug!(blocks = payload.blocks.len(), "posting payload to Slack webhook");

    let response = client.post(webhook_url).json(payload).send().await?;
    let status = response.status();
    debug!(status = status.as_u16(), "Slack webhook responded");

    if status != StatusCode::OK {
        let body = response.text().await?;
        return Err(NotifyError::SlackWebhook {
            status: status.as_u16(),
            body,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slack::blocks::{Block, TextObject};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> Payload {
        Payload {
            blocks: vec![
                Block::Section { text: TextObject::mrkdwn("hello") },
                Block::Divider,
            ],
        }
    }

    #[tokio::test]
    async fn test_post_succeeds_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/T/B/X"))
            .and(body_json(json!({
                "blocks": [
                    {"type": "section", "text": {"type": "mrkdwn", "text": "hello"}},
                    {"type": "divider"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/services/T/B/X", server.uri());
        post_payload(&Client::new(), &url, &payload()).await.unwrap();
    }

    #[tokio::test]
    async fn test_post_reports_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
            .mount(&server)
            .await;

        let err = post_payload(&Client::new(), &server.uri(), &payload())
            .await
            .unwrap_err();

        assert!(matches!(err, NotifyError::SlackWebhook { status: 400, .. }));
        assert_eq!(err.to_string(), "Slack webhook error 400: invalid_blocks");
    }
}
