//! Claim extraction from document text.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::parse::strip_code_fences;
use super::prompts::EXTRACT_CLAIMS_PROMPT;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::traits::llm::{CompletionRequest, LanguageModel};
use crate::types::claim::{Claim, ClaimCategory};
use crate::types::truncate_chars;

/// Claim as the model writes it.
#[derive(Debug, Deserialize)]
struct RawClaim {
    claim: String,
    #[serde(default)]
    category: Option<String>,
}

/// Decode a model response into claims.
///
/// Anything but a well-formed JSON array of `{claim, category}` objects
/// yields an empty list: no partial salvage. Unknown categories become
/// `other` and blank claims are dropped.
pub fn parse_claims(raw: &str) -> Vec<Claim> {
    let normalized = strip_code_fences(raw);

    match serde_json::from_str::<Vec<RawClaim>>(&normalized) {
        Ok(raw_claims) => raw_claims
            .into_iter()
            .filter_map(|c| {
                let category = c
                    .category
                    .as_deref()
                    .map(ClaimCategory::from_label)
                    .unwrap_or_default();
                Claim::new(c.claim, category)
            })
            .collect(),
        Err(e) => {
            warn!(error = %e, "Claim extraction response was not a JSON claim list");
            Vec::new()
        }
    }
}

/// Asks a language model for the verifiable claims in a document.
pub struct ClaimExtractor {
    llm: Arc<dyn LanguageModel>,
    config: PipelineConfig,
}

impl ClaimExtractor {
    pub fn new(llm: Arc<dyn LanguageModel>, config: PipelineConfig) -> Self {
        Self { llm, config }
    }

    /// Extract claims from the first `max_input_chars` of `text`.
    ///
    /// An empty result is a valid outcome, not an error. Only the model
    /// call itself can fail.
    pub async fn extract(&self, text: &str) -> Result<Vec<Claim>> {
        let input = truncate_chars(text, self.config.max_input_chars);
        let request = CompletionRequest::new(
            &self.config.extraction_model,
            EXTRACT_CLAIMS_PROMPT,
            input,
            self.config.extraction_max_tokens,
        );

        let raw = self
            .config
            .retry
            .run_with_timeout("extract_claims", self.config.call_timeout(), || {
                self.llm.complete(request.clone())
            })
            .await?;
        debug!(response = %raw, "Claim extraction response");

        let claims = parse_claims(&raw);
        info!(claims = claims.len(), input_chars = input.chars().count(), "Extracted claims");
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLanguageModel;

    #[test]
    fn test_parse_valid_list() {
        let claims = parse_claims(
            r#"[
                {"claim": "The Eiffel Tower is 330 m tall.", "category": "technical"},
                {"claim": "Apple reported $383B revenue in 2023.", "category": "financial"}
            ]"#,
        );

        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].category(), ClaimCategory::Technical);
        assert_eq!(claims[1].text(), "Apple reported $383B revenue in 2023.");
    }

    #[test]
    fn test_parse_fenced_list() {
        let claims = parse_claims("```json\n[{\"claim\": \"x happened in 1999\", \"category\": \"date\"}]\n```");
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].category(), ClaimCategory::Date);
    }

    #[test]
    fn test_parse_malformed_is_empty() {
        assert!(parse_claims("[{\"claim\": \"unterminated\"").is_empty());
        assert!(parse_claims("[not json]").is_empty());
        assert!(parse_claims("Here are the claims: none").is_empty());
        assert!(parse_claims("").is_empty());
    }

    #[test]
    fn test_parse_non_list_is_empty() {
        assert!(parse_claims(r#"{"claim": "x", "category": "date"}"#).is_empty());
        assert!(parse_claims("42").is_empty());
    }

    #[test]
    fn test_one_bad_element_rejects_all() {
        let claims = parse_claims(r#"[{"claim": "good", "category": "date"}, {"category": "date"}]"#);
        assert!(claims.is_empty());
    }

    #[test]
    fn test_unknown_category_and_blank_claims() {
        let claims = parse_claims(
            r#"[{"claim": "a", "category": "weather"}, {"claim": "b"}, {"claim": "  ", "category": "date"}]"#,
        );

        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].category(), ClaimCategory::Other);
        assert_eq!(claims[1].category(), ClaimCategory::Other);
    }

    #[tokio::test]
    async fn test_extract_truncates_input() {
        let config = PipelineConfig::default();
        let llm = MockLanguageModel::new().with_response(&config.extraction_model, "[]");
        let extractor = ClaimExtractor::new(Arc::new(llm.clone()), config.clone());

        let text = "é".repeat(20_000);
        let claims = extractor.extract(&text).await.unwrap();

        assert!(claims.is_empty());
        let calls = llm.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].user.chars().count(), 12_000);
        assert_eq!(calls[0].system, EXTRACT_CLAIMS_PROMPT);
        assert_eq!(calls[0].temperature, 0.0);
        assert_eq!(calls[0].max_tokens, 2048);
    }
}
