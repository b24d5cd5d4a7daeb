//! Tavily-backed web searcher.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{kind_for_status, kind_for_transport, ErrorKind, FactCheckError, Result};
use crate::security::SecretString;
use crate::traits::searcher::{SearchHit, SearchRequest, WebSearcher};

const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Tavily search request.
#[derive(Debug, Serialize)]
struct TavilyRequest<'a> {
    query: &'a str,
    search_depth: &'a str,
    max_results: usize,
}

/// Tavily search response.
#[derive(Debug, Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

/// A single Tavily search result. Every field is optional on the wire.
#[derive(Debug, Deserialize)]
struct TavilyResult {
    url: Option<String>,
    title: Option<String>,
    content: Option<String>,
    score: Option<f64>,
}

impl From<TavilyResult> for SearchHit {
    fn from(r: TavilyResult) -> Self {
        SearchHit {
            url: r.url,
            title: r.title,
            content: r.content,
            score: r.score,
        }
    }
}

/// Searcher backed by the Tavily search API.
#[derive(Clone)]
pub struct TavilySearcher {
    client: reqwest::Client,
    api_key: SecretString,
}

impl TavilySearcher {
    /// Create a new Tavily searcher with a 30 second request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, Duration::from_secs(30))
    }

    /// Create a searcher with a custom request timeout.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let api_key = SecretString::new(api_key);
        if api_key.is_blank() {
            return Err(FactCheckError::Config("Tavily API key is empty".into()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FactCheckError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
        })
    }
}

impl std::fmt::Debug for TavilySearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilySearcher")
            .field("api_key", &self.api_key)
            .finish()
    }
}

#[async_trait]
impl WebSearcher for TavilySearcher {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        let start = std::time::Instant::now();
        let body = TavilyRequest {
            query: &request.query,
            search_depth: request.depth.as_str(),
            max_results: request.max_results,
        };

        let response = self
            .client
            .post(TAVILY_SEARCH_URL)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Tavily request failed");
                let kind = kind_for_transport(&e);
                FactCheckError::search(e, kind)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Tavily API error");
            return Err(FactCheckError::search(
                format!("Tavily API error {}: {}", status, error_text),
                kind_for_status(status.as_u16()),
            ));
        }

        let tavily_response: TavilyResponse = response
            .json()
            .await
            .map_err(|e| FactCheckError::search(e, ErrorKind::NonRetryable))?;

        debug!(
            results = tavily_response.results.len(),
            duration_ms = start.elapsed().as_millis(),
            "Tavily search"
        );

        Ok(tavily_response
            .results
            .into_iter()
            .map(SearchHit::from)
            .collect())
    }
}
