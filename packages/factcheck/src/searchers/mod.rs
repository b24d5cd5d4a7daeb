//! Web searcher implementations.

pub mod rate_limited;
pub mod tavily;

pub use rate_limited::{RateLimitedSearcher, SearcherExt};
pub use tavily::TavilySearcher;
