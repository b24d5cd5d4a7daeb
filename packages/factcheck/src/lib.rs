//! Document Fact-Checking Library
//!
//! Extracts verifiable factual claims from document text, retrieves live
//! web evidence for each claim, and renders a typed verdict
//! (VERIFIED / INACCURATE / FALSE / INCONCLUSIVE) with an explanation,
//! a suggested correction and source attribution.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use factcheck::{Pipeline, PipelineConfig, PipelineOutcome, TavilySearcher};
//!
//! let llm = Arc::new(openai_client::OpenAIClient::new(groq_key)
//!     .with_base_url("https://api.groq.com/openai/v1"));
//! let searcher = Arc::new(TavilySearcher::new(tavily_key)?);
//!
//! let pipeline = Pipeline::new(llm, searcher, PipelineConfig::default());
//! if let PipelineOutcome::Checked(report) = pipeline.run(&text).await? {
//!     println!("{} claims, {} false", report.summary.total, report.summary.false_count);
//! }
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (LanguageModel, WebSearcher, DocumentTextExtractor)
//! - [`types`] - Claims, evidence, verdict records and reports
//! - [`pipeline`] - Extraction, retrieval, classification, parsing, orchestration
//! - [`searchers`] - Tavily searcher and rate limiting
//! - [`retry`] - Backoff and per-call deadlines
//! - [`testing`] - Mock implementations for testing

pub mod config;
pub mod error;
pub mod pipeline;
pub mod retry;
pub mod searchers;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "openai")]
pub mod llm;

// Re-export core types at crate root
pub use config::PipelineConfig;
pub use error::{ErrorKind, FactCheckError, Result};
pub use retry::RetryPolicy;
pub use traits::{
    document::DocumentTextExtractor,
    llm::{CompletionRequest, LanguageModel},
    searcher::{SearchDepth, SearchHit, SearchRequest, WebSearcher},
};
pub use types::{
    claim::{Claim, ClaimCategory},
    evidence::{Evidence, EvidenceItem},
    report::{ClaimResult, FactCheckReport, PipelineOutcome, VerdictSummary},
    verdict::{Verdict, VerdictOrigin, VerdictRecord, MAX_SOURCES},
};

pub use pipeline::{
    parse, parse_claims, parse_verdict, ClaimExtractor, EvidenceRetriever, ParsedVerdict, Pipeline,
    VerdictClassifier,
};

pub use searchers::{RateLimitedSearcher, SearcherExt, TavilySearcher};
pub use security::SecretString;

pub use testing::{MockLanguageModel, MockWebSearcher};
