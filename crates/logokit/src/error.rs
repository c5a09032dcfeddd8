//! Error types for LogoKit

use thiserror::Error;

/// Errors that can occur while talking to the lookup and logo services
///
/// [`LogoResolver::resolve`](crate::LogoResolver::resolve) never returns these;
/// each one is logged and turned into "this path yields nothing".
#[derive(Debug, Error)]
pub enum LookupError {
    /// Failed to build HTTP client
    #[error("Failed to create HTTP client")]
    ClientBuildError(#[source] reqwest::Error),

    /// A URL could not be built from an endpoint template
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout, refused connection, DNS failure or any other transport error
    #[error("Network failure: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    /// Upstream answered with something other than HTTP 200
    #[error("Upstream returned HTTP {status}")]
    UpstreamError { status: u16 },

    /// Body did not have the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl LookupError {
    /// Create an error from a reqwest error
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            LookupError::InvalidUrl(err.to_string())
        } else {
            LookupError::NetworkFailure(err)
        }
    }

    /// True if the underlying request ran out of time
    pub fn is_timeout(&self) -> bool {
        matches!(self, LookupError::NetworkFailure(e) if e.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LookupError::UpstreamError { status: 503 }.to_string(),
            "Upstream returned HTTP 503"
        );
        assert_eq!(
            LookupError::MalformedResponse("expected array".to_string()).to_string(),
            "Malformed response: expected array"
        );
        assert_eq!(
            LookupError::InvalidUrl("relative URL without a base".to_string()).to_string(),
            "Invalid URL: relative URL without a base"
        );
    }

    #[test]
    fn test_is_timeout_only_for_network_failures() {
        assert!(!LookupError::UpstreamError { status: 404 }.is_timeout());
        assert!(!LookupError::MalformedResponse(String::new()).is_timeout());
    }
}
