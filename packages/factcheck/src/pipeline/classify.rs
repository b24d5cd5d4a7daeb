//! Verdict classification for a single claim.

use std::sync::Arc;

use tracing::debug;

use super::prompts::{format_verdict_input, CLASSIFY_VERDICT_PROMPT};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::traits::llm::{CompletionRequest, LanguageModel};
use crate::types::truncate_chars;

/// Asks a language model to judge a claim against evidence.
///
/// Returns the raw response; see [`parse_verdict`](super::parse::parse_verdict).
pub struct VerdictClassifier {
    llm: Arc<dyn LanguageModel>,
    config: PipelineConfig,
}

impl VerdictClassifier {
    pub fn new(llm: Arc<dyn LanguageModel>, config: PipelineConfig) -> Self {
        Self { llm, config }
    }

    /// Build the request for a claim. Evidence is cut to `max_input_chars`.
    pub fn request_for(&self, claim: &str, evidence_text: &str) -> CompletionRequest {
        let evidence = truncate_chars(evidence_text, self.config.max_input_chars);
        CompletionRequest::new(
            &self.config.classification_model,
            CLASSIFY_VERDICT_PROMPT,
            format_verdict_input(claim, evidence),
            self.config.classification_max_tokens,
        )
    }

    pub async fn classify(&self, claim: &str, evidence_text: &str) -> Result<String> {
        let request = self.request_for(claim, evidence_text);

        let raw = self
            .config
            .retry
            .run_with_timeout("classify_verdict", self.config.call_timeout(), || {
                self.llm.complete(request.clone())
            })
            .await?;

        debug!(claim = %claim, response = %raw, "Verdict classification response");
        Ok(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockLanguageModel;

    fn classifier(llm: &MockLanguageModel) -> VerdictClassifier {
        VerdictClassifier::new(Arc::new(llm.clone()), PipelineConfig::default())
    }

    #[tokio::test]
    async fn test_returns_raw_response_unparsed() {
        let config = PipelineConfig::default();
        let llm = MockLanguageModel::new()
            .with_response(&config.classification_model, "  not json at all \n");

        let raw = classifier(&llm).classify("claim", "evidence").await.unwrap();
        assert_eq!(raw, "not json at all");
    }

    #[tokio::test]
    async fn test_request_layout() {
        let config = PipelineConfig::default();
        let llm = MockLanguageModel::new().with_default_response("{}");

        classifier(&llm)
            .classify("Water boils at 90C.", "It boils at 100C.")
            .await
            .unwrap();

        let calls = llm.calls_for(&config.classification_model);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, CLASSIFY_VERDICT_PROMPT);
        assert_eq!(calls[0].user, "CLAIM:\nWater boils at 90C.\n\nEVIDENCE:\nIt boils at 100C.");
        assert_eq!(calls[0].max_tokens, 1024);
        assert_eq!(calls[0].temperature, 0.0);
    }

    #[test]
    fn test_evidence_truncated() {
        let llm = MockLanguageModel::new();
        let request = classifier(&llm).request_for("c", &"x".repeat(13_000));
        let prefix = "CLAIM:\nc\n\nEVIDENCE:\n";
        assert_eq!(request.user.chars().count(), prefix.len() + 12_000);
    }

    #[tokio::test]
    async fn test_auth_failure_surfaces() {
        let config = PipelineConfig::default();
        let llm = MockLanguageModel::new()
            .with_failure(&config.classification_model, ErrorKind::NonRetryable);

        let err = classifier(&llm).classify("c", "e").await.unwrap_err();
        assert!(!err.is_retryable());
        assert_eq!(llm.calls().len(), 1);
    }
}
