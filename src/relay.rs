// Webhook forwarding for Minutes Relay
//
// This module defines the narrow interface to the external summarization
// webhook and its HTTP implementation. Handlers depend on the trait, so
// tests can substitute a fake collaborator without a network call.

use async_trait::async_trait;
use log::{debug, error};
use serde_json::Value;

use crate::error::RelayError;

/// The inbound request body as received from the browser, forwarded as-is
#[derive(Debug, Clone)]
pub struct UploadPayload {
    /// The original `Content-Type` header, including the multipart boundary
    pub content_type: Option<String>,
    /// Raw body bytes, never re-encoded or inspected
    pub body: Vec<u8>,
}

/// One-shot forwarding to the external summarization webhook
#[async_trait]
pub trait SummaryWebhook: Send + Sync {
    /// Sends `payload` to `url` authorized by `token`, returning the
    /// webhook's parsed JSON body.
    async fn forward(
        &self,
        url: &str,
        token: &str,
        payload: UploadPayload,
    ) -> Result<Value, RelayError>;
}

/// `reqwest`-backed webhook client
///
/// No explicit timeout is configured: the relay waits as long as the
/// transport allows, and a slow webhook delays the client response.
pub struct HttpSummaryWebhook {
    client: reqwest::Client,
}

impl HttpSummaryWebhook {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpSummaryWebhook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SummaryWebhook for HttpSummaryWebhook {
    async fn forward(
        &self,
        url: &str,
        token: &str,
        payload: UploadPayload,
    ) -> Result<Value, RelayError> {
        debug!("Forwarding {} byte upload to webhook", payload.body.len());

        let mut request = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bearer {}", token))
            .body(payload.body);
        if let Some(content_type) = payload.content_type {
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Webhook call failed with status {}", status);
            return Err(RelayError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RelayError::Upstream(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| RelayError::MalformedResponse(e.to_string()))
    }
}
