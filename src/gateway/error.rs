//! Transport error classification

/// Text a transport failure carries when the endpoint could not be reached
pub const FAILED_TO_FETCH: &str = "Failed to fetch";

/// Failure raised while sending a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never reached the endpoint (DNS, connect, TLS, network)
    #[error("Failed to fetch: {0}")]
    Unreachable(String),
    /// Any other failure
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Whether this failure means the endpoint could not be reached
    pub fn is_connectivity(&self) -> bool {
        matches!(self, TransportError::Unreachable(_)) || self.to_string().contains(FAILED_TO_FETCH)
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() || e.is_request() {
            TransportError::Unreachable(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_display_mentions_failed_to_fetch() {
        let err = TransportError::Unreachable("dns error".to_string());
        assert_eq!(err.to_string(), "Failed to fetch: dns error");
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_other_with_fetch_text_is_connectivity() {
        let err = TransportError::Other("TypeError: Failed to fetch".to_string());
        assert!(err.is_connectivity());
    }

    #[test]
    fn test_other_is_not_connectivity() {
        let err = TransportError::Other("payload too large".to_string());
        assert!(!err.is_connectivity());
        assert_eq!(err.to_string(), "payload too large");
    }
}
