//! Testing utilities including mock implementations.
//!
//! These let applications exercise the pipeline without making real
//! language-model or search calls.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{ErrorKind, FactCheckError, Result};
use crate::traits::llm::{CompletionRequest, LanguageModel};
use crate::traits::searcher::{SearchHit, SearchRequest, WebSearcher};

/// Scripted reply for one call.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Fail(ErrorKind),
}

/// A mock language model for testing.
///
/// Replies are queued per model and consumed in order. When a model's
/// queue is empty the default reply is used; without one the call fails
/// with a non-retryable error.
#[derive(Default, Clone)]
pub struct MockLanguageModel {
    queues: Arc<RwLock<HashMap<String, VecDeque<MockReply>>>>,
    default_reply: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<CompletionRequest>>>,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text reply for a model.
    pub fn with_response(self, model: impl Into<String>, text: impl Into<String>) -> Self {
        self.push(model.into(), MockReply::Text(text.into()));
        self
    }

    /// Queue a failure for a model.
    pub fn with_failure(self, model: impl Into<String>, kind: ErrorKind) -> Self {
        self.push(model.into(), MockReply::Fail(kind));
        self
    }

    /// Reply used when a model has nothing queued.
    pub fn with_default_response(self, text: impl Into<String>) -> Self {
        *self.default_reply.write().unwrap() = Some(text.into());
        self
    }

    /// Get all requests made to this mock.
    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.read().unwrap().clone()
    }

    /// Requests made for one model.
    pub fn calls_for(&self, model: &str) -> Vec<CompletionRequest> {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.model == model)
            .cloned()
            .collect()
    }

    fn push(&self, model: String, reply: MockReply) {
        self.queues
            .write()
            .unwrap()
            .entry(model)
            .or_default()
            .push_back(reply);
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let model = request.model.clone();
        self.calls.write().unwrap().push(request);

        let queued = self
            .queues
            .write()
            .unwrap()
            .get_mut(&model)
            .and_then(|q| q.pop_front());

        match queued {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Fail(kind)) => Err(FactCheckError::llm(
                format!("mock failure for model {}", model),
                kind,
            )),
            None => self.default_reply.read().unwrap().clone().ok_or_else(|| {
                FactCheckError::llm(
                    format!("no scripted response for model {}", model),
                    ErrorKind::NonRetryable,
                )
            }),
        }
    }
}

/// Mock web searcher for testing.
///
/// Returns configured hits per query (empty for unknown queries). Failures
/// queued for a query are returned first, one per call.
#[derive(Default, Clone)]
pub struct MockWebSearcher {
    results: Arc<RwLock<HashMap<String, Vec<SearchHit>>>>,
    failures: Arc<RwLock<HashMap<String, VecDeque<ErrorKind>>>>,
    calls: Arc<RwLock<Vec<SearchRequest>>>,
}

impl MockWebSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add hits for a query.
    pub fn with_results(self, query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        self.results.write().unwrap().insert(query.into(), hits);
        self
    }

    /// Add `(content, url)` pairs as hits for a query.
    pub fn with_snippets(self, query: impl Into<String>, snippets: &[(&str, &str)]) -> Self {
        let hits = snippets
            .iter()
            .map(|(content, url)| SearchHit::new(*content, *url))
            .collect();
        self.with_results(query, hits)
    }

    /// Fail the next search for `query` with the given kind.
    pub fn with_failure(self, query: impl Into<String>, kind: ErrorKind) -> Self {
        self.failures
            .write()
            .unwrap()
            .entry(query.into())
            .or_default()
            .push_back(kind);
        self
    }

    /// Get all requests made to this mock.
    pub fn calls(&self) -> Vec<SearchRequest> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl WebSearcher for MockWebSearcher {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        self.calls.write().unwrap().push(request.clone());

        let failure = self
            .failures
            .write()
            .unwrap()
            .get_mut(&request.query)
            .and_then(|q| q.pop_front());
        if let Some(kind) = failure {
            return Err(FactCheckError::search(
                format!("mock failure for query {}", request.query),
                kind,
            ));
        }

        Ok(self
            .results
            .read()
            .unwrap()
            .get(&request.query)
            .cloned()
            .unwrap_or_default())
    }
}
