//! HTTP client for the lead webhook
//!
//! Posts the form as JSON to the configured webhook URL. A request is sent
//! once per call; there is no retry, timeout or deduplication.

use super::error::SubmissionError;
use super::traits::LeadSubmitter;
use crate::state::LeadPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

/// Client for delivering leads to the webhook
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    /// Create a client posting to `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl LeadSubmitter for WebhookClient {
    async fn submit(&self, payload: &LeadPayload) -> Result<(), SubmissionError> {
        let body = serde_json::to_vec(payload)?;
        tracing::info!(url = %self.url, keys = payload.key_count(), "Submitting lead");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Error submitting form: {e}");
                SubmissionError::Network(e)
            })?;

        let status = response.status();
        // Body is optional on success and only read for diagnostics
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            tracing::debug!(%status, body = %text, "Webhook accepted lead");
            return Ok(());
        }

        let err = SubmissionError::rejected(status, &text);
        tracing::warn!("{err}");
        Err(err)
    }

    fn target(&self) -> String {
        self.url.clone()
    }
}
