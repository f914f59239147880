//! HTTP transport for the registration endpoint
//!
//! The endpoint is a spreadsheet-backed web app that may only be usable in an
//! opaque, fire-and-forget mode, so the response is dropped unread.

use super::error::TransportError;
use super::traits::SubmissionTransport;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Posts registrations with `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// Create a transport for the given endpoint URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn send(&self, payload: String) -> Result<(), TransportError> {
        tracing::info!(endpoint = %self.endpoint, bytes = payload.len(), "sending registration");

        // Status and body are not inspected.
        let _response = self.client.post(&self.endpoint).body(payload).send().await?;

        tracing::info!("registration request completed");
        Ok(())
    }
}
