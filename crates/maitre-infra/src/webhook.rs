//! Workflow webhook transport.
//!
//! POSTs each chat turn as `{"chatInput": text}` to the configured
//! webhook URL and hands the raw JSON reply back to the controller.
//! Everything non-2xx becomes [`SendError::UpstreamStatus`]; network
//! failures and timeouts become [`SendError::Transport`].

use std::time::Duration;

use serde_json::{Value, json};
use tracing::debug;

use maitre_core::sender::MessageSender;
use maitre_types::error::SendError;

/// Per-request deadline. Without one, an unresponsive webhook holds
/// the busy latch indefinitely. Surfaces as `SendError::Transport`.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends chat turns to the workflow webhook.
pub struct WebhookSender {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookSender {
    /// Create a sender for the given webhook URL.
    pub fn new(webhook_url: impl Into<String>) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }
}

impl MessageSender for WebhookSender {
    async fn send(&self, text: &str) -> Result<Value, SendError> {
        debug!(url = %self.webhook_url, "forwarding chat turn to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&chat_payload(text))
            .send()
            .await
            .map_err(|err| SendError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| SendError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(SendError::UpstreamStatus {
                status: status.as_u16(),
                message: error_message_from_body(&body),
            });
        }

        // A non-JSON 2xx body is a plain-text answer, not an error.
        Ok(serde_json::from_str(&body).unwrap_or_else(|_| json!({ "response": body })))
    }
}

/// Request body the webhook's chat trigger expects.
fn chat_payload(text: &str) -> Value {
    json!({ "chatInput": text })
}

/// Prefer the JSON `message` field of an error body, else the raw text.
fn error_message_from_body(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .or_else(|| Some(body.to_string()))
}
