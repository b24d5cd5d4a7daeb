//! Rate-limited searcher wrapper.
//!
//! Wraps any `WebSearcher` with a `governor` limiter so concurrent claim
//! checks stay within the provider's quota.

use std::num::NonZeroU32;
use std::sync::Arc;

use async_trait::async_trait;
use governor::{Quota, RateLimiter};

use crate::error::Result;
use crate::traits::searcher::{SearchHit, SearchRequest, WebSearcher};

type DefaultRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// A searcher wrapper that enforces a request rate.
pub struct RateLimitedSearcher<S: WebSearcher> {
    inner: S,
    limiter: Arc<DefaultRateLimiter>,
}

impl<S: WebSearcher> RateLimitedSearcher<S> {
    /// Allow at most `requests_per_second` searches per second.
    pub fn new(searcher: S, requests_per_second: NonZeroU32) -> Self {
        Self::with_quota(searcher, Quota::per_second(requests_per_second))
    }

    /// Create with a custom quota.
    pub fn with_quota(searcher: S, quota: Quota) -> Self {
        Self {
            inner: searcher,
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: WebSearcher> WebSearcher for RateLimitedSearcher<S> {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchHit>> {
        self.limiter.until_ready().await;
        self.inner.search(request).await
    }
}

/// Extension trait for easy rate limiting.
pub trait SearcherExt: WebSearcher + Sized {
    /// Wrap this searcher with rate limiting.
    fn rate_limited(self, requests_per_second: NonZeroU32) -> RateLimitedSearcher<Self> {
        RateLimitedSearcher::new(self, requests_per_second)
    }
}

impl<S: WebSearcher + Sized> SearcherExt for S {}
