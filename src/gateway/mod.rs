//! Submission gateway: serializes the form and hands it to the transport

mod client;
mod error;
mod traits;

pub use client::HttpTransport;
pub use error::TransportError;
pub use traits::SubmissionTransport;

#[cfg(test)]
pub use traits::MockSubmissionTransport;

use crate::state::{FormValues, SubmissionOutcome};

/// Shown when the request could complete without an error
pub const SUCCESS_MESSAGE: &str = "Registration submitted successfully!";

/// Shown when the endpoint could not be reached
pub const CONNECTIVITY_MESSAGE: &str = "Connection Error: Could not reach the registration endpoint (network/access policy). Ensure the endpoint is deployed with access for \"Anyone\".";

/// Turns form values into a submission and classifies the result
pub struct SubmissionGateway {
    transport: Box<dyn SubmissionTransport>,
}

impl SubmissionGateway {
    pub fn new(transport: Box<dyn SubmissionTransport>) -> Self {
        Self { transport }
    }

    /// Submit the full value map.
    ///
    /// A call that completes without a transport error counts as success even
    /// though the endpoint's verdict is unknown.
    pub async fn submit(&self, values: &FormValues) -> SubmissionOutcome {
        let payload = match serde_json::to_string(values) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize registration: {e}");
                return SubmissionOutcome::error(format!("Error: {e}"));
            }
        };
        tracing::debug!(%payload, "registration payload");

        match self.transport.send(payload).await {
            Ok(()) => SubmissionOutcome::success(SUCCESS_MESSAGE),
            Err(e) => {
                tracing::error!("Submission error: {e}");
                classify_failure(&e)
            }
        }
    }
}

/// Map a transport failure to the message shown to the user
pub fn classify_failure(error: &TransportError) -> SubmissionOutcome {
    if error.is_connectivity() {
        SubmissionOutcome::error(CONNECTIVITY_MESSAGE)
    } else {
        SubmissionOutcome::error(format!("Error: {error}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{OutcomeKind, RegistrationForm};
    use mockall::predicate::function;
    use pretty_assertions::assert_eq;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::default();
        form.select_class(Some(3));
        form.set_field_value("round1_student1_name", "Alice");
        form
    }

    #[test]
    fn test_sends_flat_json_map() {
        let form = filled_form();
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .with(function(|payload: &String| {
                let parsed: serde_json::Map<String, serde_json::Value> =
                    serde_json::from_str(payload).unwrap();
                parsed.len() == 12
                    && parsed["class"] == "3"
                    && parsed["program"] == "Program Name"
                    && parsed["round1_student1_name"] == "Alice"
                    && parsed["round9_student1_name"] == ""
                    && !parsed.contains_key("round2_student2_name")
            }))
            .times(1)
            .returning(|_| Ok(()));

        let gateway = SubmissionGateway::new(Box::new(transport));
        let outcome = tokio_test::block_on(gateway.submit(form.values()));

        assert_eq!(outcome, SubmissionOutcome::success(SUCCESS_MESSAGE));
    }

    #[tokio::test]
    async fn test_failed_to_fetch_is_connectivity_error() {
        let form = filled_form();
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .times(1)
            .returning(|_| Err(TransportError::Other("TypeError: Failed to fetch".to_string())));

        let gateway = SubmissionGateway::new(Box::new(transport));
        let outcome = gateway.submit(form.values()).await;

        assert_eq!(outcome.kind, OutcomeKind::Error);
        assert!(outcome.message.contains("Could not reach"));
        assert!(outcome.message.contains("access policy"));
    }

    #[tokio::test]
    async fn test_unreachable_is_connectivity_error() {
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(TransportError::Unreachable("connection refused".to_string())));

        let gateway = SubmissionGateway::new(Box::new(transport));
        let outcome = gateway.submit(filled_form().values()).await;

        assert_eq!(outcome, SubmissionOutcome::error(CONNECTIVITY_MESSAGE));
    }

    #[tokio::test]
    async fn test_other_failure_echoes_description() {
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .returning(|_| Err(TransportError::Other("quota exceeded".to_string())));

        let gateway = SubmissionGateway::new(Box::new(transport));
        let outcome = gateway.submit(filled_form().values()).await;

        assert_eq!(outcome, SubmissionOutcome::error("Error: quota exceeded"));
    }

    #[test]
    fn test_classify_failure() {
        let outcome = classify_failure(&TransportError::Other("bad gateway".to_string()));
        assert_eq!(outcome.message, "Error: bad gateway");
        assert!(!outcome.is_success());
    }
}
