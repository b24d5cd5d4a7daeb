//! Verification pipeline: extract, retrieve, classify, parse, aggregate.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::classify::VerdictClassifier;
use super::extract::ClaimExtractor;
use super::parse::parse_verdict;
use super::retrieve::EvidenceRetriever;
use crate::config::PipelineConfig;
use crate::error::{FactCheckError, Result};
use crate::traits::llm::LanguageModel;
use crate::traits::searcher::WebSearcher;
use crate::types::claim::Claim;
use crate::types::report::{ClaimResult, FactCheckReport, PipelineOutcome};
use crate::types::verdict::VerdictRecord;

/// Checks every claim in a document.
///
/// # Example
///
/// ```rust,ignore
/// let pipeline = Pipeline::new(llm, searcher, PipelineConfig::default());
///
/// match pipeline.run(&text).await? {
///     PipelineOutcome::NoClaims => println!("No factual claims found."),
///     PipelineOutcome::Checked(report) => render(&report),
/// }
/// ```
pub struct Pipeline {
    extractor: ClaimExtractor,
    retriever: EvidenceRetriever,
    classifier: VerdictClassifier,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        searcher: Arc<dyn WebSearcher>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            extractor: ClaimExtractor::new(Arc::clone(&llm), config.clone()),
            retriever: EvidenceRetriever::new(searcher, config.clone()),
            classifier: VerdictClassifier::new(llm, config.clone()),
            config,
        }
    }

    /// Run the pipeline over document text.
    pub async fn run(&self, text: &str) -> Result<PipelineOutcome> {
        self.run_with_cancel(text, CancellationToken::new()).await
    }

    /// Run with cancellation support.
    ///
    /// Results keep the order in which claims were extracted, whatever
    /// the concurrency setting.
    pub async fn run_with_cancel(
        &self,
        text: &str,
        cancel: CancellationToken,
    ) -> Result<PipelineOutcome> {
        info!(
            input_chars = text.chars().count(),
            concurrency = self.config.concurrency(),
            "Starting fact check"
        );

        let claims = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(FactCheckError::Cancelled),
            claims = self.extractor.extract(text) => claims?,
        };

        if claims.is_empty() {
            info!("No factual claims found");
            return Ok(PipelineOutcome::NoClaims);
        }

        let results: Vec<ClaimResult> = stream::iter(claims)
            .map(|claim| self.check_claim(claim, &cancel))
            .buffered(self.config.concurrency())
            .try_collect()
            .await?;

        let report = FactCheckReport::new(results);
        info!(
            total = report.summary.total,
            verified = report.summary.verified,
            inaccurate = report.summary.inaccurate,
            false_count = report.summary.false_count,
            inconclusive = report.summary.inconclusive,
            degraded = report.summary.degraded,
            "Fact check complete"
        );

        Ok(PipelineOutcome::Checked(report))
    }

    /// Retrieve evidence for one claim and judge it.
    ///
    /// The record carries at most three source URLs, in retrieval order.
    pub async fn verify_claim(&self, claim: &str) -> Result<VerdictRecord> {
        let evidence = self.retriever.retrieve(claim).await?;
        let evidence_text = evidence.combined_text(self.config.max_input_chars);

        let raw = self.classifier.classify(claim, &evidence_text).await?;

        let parsed = parse_verdict(&raw);
        if parsed.is_fallback() {
            warn!(claim = %claim, "Verdict response was not a JSON object, used keyword fallback");
        }

        Ok(parsed.into_record().with_sources(evidence.source_urls()))
    }

    async fn check_claim(&self, claim: Claim, cancel: &CancellationToken) -> Result<ClaimResult> {
        let outcome = tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FactCheckError::Cancelled),
            record = self.verify_claim(claim.text()) => record,
        };

        let result = match outcome {
            Ok(record) => record,
            Err(FactCheckError::Cancelled) => return Err(FactCheckError::Cancelled),
            Err(e) if self.config.isolate_failures => {
                warn!(claim = %claim.text(), error = %e, "Claim check failed, recording as inconclusive");
                VerdictRecord::failed(&e)
            }
            Err(e) => return Err(e),
        };

        info!(
            claim = %claim.text(),
            verdict = %result.verdict,
            origin = ?result.origin,
            sources = result.sources.len(),
            "Claim checked"
        );

        Ok(ClaimResult { claim, result })
    }
}
