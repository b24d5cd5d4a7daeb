//! Typed errors for the fact-checking library.
//!
//! Uses `thiserror` for library errors (not `anyhow`). Every error can be
//! classified with [`FactCheckError::kind`] so callers and the retry policy
//! can tell transient failures from fatal ones.

use std::time::Duration;

use thiserror::Error;

/// Boxed source error from an external capability.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// How an error should be treated by retry logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorKind {
    /// Transient error (timeout, rate limit, 5xx) - retry if attempts remain
    #[default]
    Retryable,
    /// Permanent error (auth failure, bad request) - surface immediately
    NonRetryable,
    /// The run was cancelled by the caller
    Cancelled,
}

impl ErrorKind {
    /// Whether this error kind should trigger a retry.
    pub fn should_retry(&self) -> bool {
        matches!(self, ErrorKind::Retryable)
    }
}

/// Errors that can occur while checking a document.
///
/// Decode failures of model output are deliberately absent: they are
/// recovered inside the claim extractor and the verdict parser.
#[derive(Debug, Error)]
pub enum FactCheckError {
    /// Language-generation call failed
    #[error("language model error: {source}")]
    Llm {
        #[source]
        source: BoxError,
        kind: ErrorKind,
    },

    /// Web search call failed
    #[error("search error: {source}")]
    Search {
        #[source]
        source: BoxError,
        kind: ErrorKind,
    },

    /// Document text could not be extracted
    #[error("document error: {0}")]
    Document(String),

    /// External call exceeded its deadline
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Operation was cancelled
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

impl FactCheckError {
    /// Wrap a language-model failure.
    pub fn llm(source: impl Into<BoxError>, kind: ErrorKind) -> Self {
        Self::Llm {
            source: source.into(),
            kind,
        }
    }

    /// Wrap a search failure.
    pub fn search(source: impl Into<BoxError>, kind: ErrorKind) -> Self {
        Self::Search {
            source: source.into(),
            kind,
        }
    }

    /// Classify this error for retry decisions.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Llm { kind, .. } | Self::Search { kind, .. } => *kind,
            Self::Timeout(_) => ErrorKind::Retryable,
            Self::Cancelled => ErrorKind::Cancelled,
            Self::Document(_) | Self::Config(_) => ErrorKind::NonRetryable,
        }
    }

    /// Shorthand for `self.kind().should_retry()`.
    pub fn is_retryable(&self) -> bool {
        self.kind().should_retry()
    }
}

/// Classify an HTTP status from an external API.
pub(crate) fn kind_for_status(status: u16) -> ErrorKind {
    if status == 429 || status >= 500 {
        ErrorKind::Retryable
    } else {
        ErrorKind::NonRetryable
    }
}

/// Classify a transport-level `reqwest` failure.
pub(crate) fn kind_for_transport(error: &reqwest::Error) -> ErrorKind {
    if error.is_timeout() || error.is_connect() || error.is_request() {
        ErrorKind::Retryable
    } else {
        ErrorKind::NonRetryable
    }
}

/// Result type alias for fact-checking operations.
pub type Result<T> = std::result::Result<T, FactCheckError>;
