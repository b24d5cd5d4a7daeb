//! Pipeline configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::retry::RetryPolicy;
use crate::traits::searcher::SearchDepth;

/// Configuration for the verification pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Higher-capacity model used for claim extraction.
    pub extraction_model: String,

    /// Output token budget for claim extraction.
    pub extraction_max_tokens: u32,

    /// Lower-latency model used for verdict classification.
    pub classification_model: String,

    /// Output token budget for verdict classification.
    pub classification_max_tokens: u32,

    /// Characters of document text or evidence sent to a model.
    ///
    /// A token-budget boundary, not a data-model one. Default: 12,000.
    pub max_input_chars: usize,

    /// Search results requested per claim. Default: 5.
    pub search_max_results: usize,

    pub search_depth: SearchDepth,

    /// Claims verified concurrently. Output order is preserved.
    ///
    /// Default: 1 (sequential).
    pub max_concurrency: usize,

    /// Deadline for each external call, in seconds.
    pub call_timeout_secs: u64,

    /// Emit an INCONCLUSIVE record for a claim whose checks fail instead of
    /// aborting the whole run.
    ///
    /// Default: true.
    pub isolate_failures: bool,

    pub retry: RetryPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extraction_model: "llama-3.3-70b-versatile".to_string(),
            extraction_max_tokens: 2048,
            classification_model: "llama-3.1-8b-instant".to_string(),
            classification_max_tokens: 1024,
            max_input_chars: 12_000,
            search_max_results: 5,
            search_depth: SearchDepth::Advanced,
            max_concurrency: 1,
            call_timeout_secs: 60,
            isolate_failures: true,
            retry: RetryPolicy::default(),
        }
    }
}

impl PipelineConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use one model for both extraction and classification.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        let model = model.into();
        self.extraction_model = model.clone();
        self.classification_model = model;
        self
    }

    pub fn with_extraction_model(mut self, model: impl Into<String>) -> Self {
        self.extraction_model = model.into();
        self
    }

    pub fn with_classification_model(mut self, model: impl Into<String>) -> Self {
        self.classification_model = model.into();
        self
    }

    pub fn with_max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout_secs = timeout.as_secs().max(1);
        self
    }

    pub fn with_isolate_failures(mut self, isolate: bool) -> Self {
        self.isolate_failures = isolate;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs.max(1))
    }

    /// Effective concurrency, never below one.
    pub fn concurrency(&self) -> usize {
        self.max_concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_input_chars, 12_000);
        assert_eq!(config.search_max_results, 5);
        assert_eq!(config.search_depth, SearchDepth::Advanced);
        assert_eq!(config.concurrency(), 1);
        assert!(config.isolate_failures);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"max_concurrency": 4, "search_depth": "basic"}"#).unwrap();

        assert_eq!(config.concurrency(), 4);
        assert_eq!(config.search_depth, SearchDepth::Basic);
        assert_eq!(config.classification_model, "llama-3.1-8b-instant");
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn test_single_model_override() {
        let config = PipelineConfig::new().with_model("gpt-4o-mini");
        assert_eq!(config.extraction_model, "gpt-4o-mini");
        assert_eq!(config.classification_model, "gpt-4o-mini");
    }

    #[test]
    fn test_zero_timeout_floors_to_one_second() {
        let config = PipelineConfig {
            call_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.call_timeout(), Duration::from_secs(1));
        assert_eq!(
            PipelineConfig::new().with_call_timeout(Duration::ZERO).call_timeout_secs,
            1
        );
    }

    #[test]
    fn test_zero_concurrency_is_sequential() {
        assert_eq!(PipelineConfig::new().with_max_concurrency(0).concurrency(), 1);
    }
}
