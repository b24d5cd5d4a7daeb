//! Error types for OpenAI client.

use thiserror::Error;

/// Result type for OpenAI client operations.
pub type Result<T> = std::result::Result<T, OpenAIError>;

/// OpenAI client errors.
#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection refused, reset, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// Request did not complete within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// HTTP 429 from the provider
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// API error (any other non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl OpenAIError {
    /// Whether retrying the same request may succeed.
    ///
    /// Network failures, timeouts, rate limits and 5xx responses are transient.
    /// Auth failures and other 4xx responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) | Self::RateLimited(_) => true,
            Self::Api { status, .. } => *status >= 500,
            Self::Config(_) | Self::Parse(_) => false,
        }
    }

    pub(crate) fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }

    pub(crate) fn from_status(status: u16, message: String) -> Self {
        if status == 429 {
            Self::RateLimited(message)
        } else {
            Self::Api { status, message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(OpenAIError::Network("reset".into()).is_retryable());
        assert!(OpenAIError::Timeout("30s".into()).is_retryable());
        assert!(OpenAIError::from_status(429, "slow down".into()).is_retryable());
        assert!(OpenAIError::from_status(503, "unavailable".into()).is_retryable());

        assert!(!OpenAIError::from_status(401, "bad key".into()).is_retryable());
        assert!(!OpenAIError::from_status(400, "bad request".into()).is_retryable());
        assert!(!OpenAIError::Config("missing key".into()).is_retryable());
        assert!(!OpenAIError::Parse("eof".into()).is_retryable());
    }

    #[test]
    fn test_rate_limit_status_maps_to_variant() {
        assert!(matches!(
            OpenAIError::from_status(429, String::new()),
            OpenAIError::RateLimited(_)
        ));
    }
}
