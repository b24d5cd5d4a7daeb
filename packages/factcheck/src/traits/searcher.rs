//! Web search capability used for evidence retrieval.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How much work the search provider should spend per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    #[default]
    Advanced,
}

impl SearchDepth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }
}

/// A search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub depth: SearchDepth,
    pub max_results: usize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, depth: SearchDepth, max_results: usize) -> Self {
        Self {
            query: query.into(),
            depth,
            max_results,
        }
    }
}

/// One result as returned by the provider. Any field may be absent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchHit {
    pub url: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Relevance score (0.0-1.0, if provided by search API)
    pub score: Option<f64>,
}

impl SearchHit {
    /// Create a hit with content and URL.
    pub fn new(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

/// Web search trait.
///
/// Results come back in the provider's relevance order; callers must not
/// reorder them.
///
/// # Implementations
///
/// - `TavilySearcher` - Tavily API
/// - `RateLimitedSearcher` - throttling wrapper around any searcher
/// - `MockWebSearcher` - For testing
#[async_trait]
pub trait WebSearcher: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>>;
}
