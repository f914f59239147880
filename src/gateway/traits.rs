//! Trait abstraction for the submission transport to enable mocking in tests

use super::error::TransportError;
use async_trait::async_trait;

/// Sends a serialized registration to the endpoint.
///
/// `Ok(())` only means the request was dispatched; the endpoint's response is
/// never visible to the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Send the JSON payload, settling once the call completes
    async fn send(&self, payload: String) -> Result<(), TransportError>;
}
