//! Claim verification pipeline.
//!
//! The stages, leaves first:
//! - Evidence retrieval (web search per claim)
//! - Claim extraction (document text to typed claims)
//! - Verdict classification (claim + evidence to raw model response)
//! - Verdict parsing (raw response to a guaranteed-shape record)
//! - Orchestration and aggregation

pub mod classify;
pub mod extract;
pub mod parse;
pub mod prompts;
pub mod retrieve;
pub mod verify;

pub use classify::VerdictClassifier;
pub use extract::{parse_claims, ClaimExtractor};
pub use parse::{parse, parse_verdict, strip_code_fences, ParsedVerdict, FALLBACK_EXPLANATION_CHARS};
pub use prompts::{format_verdict_input, CLASSIFY_VERDICT_PROMPT, EXTRACT_CLAIMS_PROMPT};
pub use retrieve::EvidenceRetriever;
pub use verify::Pipeline;
