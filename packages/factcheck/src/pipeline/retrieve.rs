//! Evidence retrieval for a single claim.

use std::sync::Arc;

use tracing::debug;

use crate::config::PipelineConfig;
use crate::error::Result;
use crate::traits::searcher::{SearchRequest, WebSearcher};
use crate::types::evidence::{Evidence, EvidenceItem};

/// Queries the web for evidence about a claim.
pub struct EvidenceRetriever {
    searcher: Arc<dyn WebSearcher>,
    config: PipelineConfig,
}

impl EvidenceRetriever {
    pub fn new(searcher: Arc<dyn WebSearcher>, config: PipelineConfig) -> Self {
        Self { searcher, config }
    }

    /// Retrieve up to `search_max_results` evidence items in relevance order.
    ///
    /// Missing content or URL fields become empty strings. Search failures
    /// propagate after the retry policy is exhausted.
    pub async fn retrieve(&self, claim: &str) -> Result<Evidence> {
        let request = SearchRequest::new(
            claim,
            self.config.search_depth,
            self.config.search_max_results,
        );
        let hits = self
            .config
            .retry
            .run_with_timeout("search", self.config.call_timeout(), || {
                self.searcher.search(&request)
            })
            .await?;

        let items: Vec<EvidenceItem> = hits
            .into_iter()
            .take(self.config.search_max_results)
            .map(|hit| EvidenceItem {
                snippet: hit.content.unwrap_or_default(),
                url: hit.url.unwrap_or_default(),
            })
            .collect();

        debug!(claim = %claim, items = items.len(), "Retrieved evidence");
        Ok(Evidence::new(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testing::MockWebSearcher;
    use crate::traits::searcher::{SearchDepth, SearchHit};

    #[tokio::test]
    async fn test_maps_hits_and_caps_count() {
        let hits = (0..7)
            .map(|i| SearchHit::new(format!("snippet {}", i), format!("https://{}.example", i)))
            .collect();
        let searcher = MockWebSearcher::new().with_results("claim", hits);
        let retriever = EvidenceRetriever::new(Arc::new(searcher.clone()), PipelineConfig::default());

        let evidence = retriever.retrieve("claim").await.unwrap();

        assert_eq!(evidence.len(), 5);
        assert_eq!(evidence.items[0].url, "https://0.example");
        assert_eq!(evidence.items[4].snippet, "snippet 4");

        let calls = searcher.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].depth, SearchDepth::Advanced);
        assert_eq!(calls[0].max_results, 5);
    }

    #[tokio::test]
    async fn test_missing_fields_become_empty() {
        let searcher = MockWebSearcher::new().with_results(
            "claim",
            vec![SearchHit {
                title: Some("only a title".into()),
                ..Default::default()
            }],
        );
        let retriever = EvidenceRetriever::new(Arc::new(searcher), PipelineConfig::default());

        let evidence = retriever.retrieve("claim").await.unwrap();
        assert_eq!(evidence.items, vec![EvidenceItem::default()]);
    }

    #[tokio::test]
    async fn test_fatal_failure_propagates() {
        let searcher = MockWebSearcher::new().with_failure("claim", ErrorKind::NonRetryable);
        let retriever = EvidenceRetriever::new(Arc::new(searcher.clone()), PipelineConfig::default());

        assert!(retriever.retrieve("claim").await.is_err());
        assert_eq!(searcher.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failure_retried() {
        let searcher = MockWebSearcher::new()
            .with_snippets("claim", &[("ok", "https://a.example")])
            .with_failure("claim", ErrorKind::Retryable);
        let retriever = EvidenceRetriever::new(Arc::new(searcher.clone()), PipelineConfig::default());

        let evidence = retriever.retrieve("claim").await.unwrap();
        assert_eq!(evidence.len(), 1);
        assert_eq!(searcher.calls().len(), 2);
    }
}
