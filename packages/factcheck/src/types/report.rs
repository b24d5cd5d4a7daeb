//! Aggregated results of a pipeline run.

use serde::Serialize;

use super::claim::Claim;
use super::verdict::{Verdict, VerdictOrigin, VerdictRecord};

/// A claim paired with its verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimResult {
    pub claim: Claim,
    pub result: VerdictRecord,
}

/// Per-verdict counts for the summary dashboard.
///
/// `total` always equals the sum of the four verdict buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VerdictSummary {
    pub total: usize,
    pub verified: usize,
    pub inaccurate: usize,
    #[serde(rename = "false")]
    pub false_count: usize,
    pub inconclusive: usize,
    /// Verdicts from the keyword fallback or a failed check
    pub degraded: usize,
}

impl VerdictSummary {
    pub fn from_results(results: &[ClaimResult]) -> Self {
        let mut summary = Self::default();
        for r in results {
            summary.total += 1;
            match r.result.verdict {
                Verdict::Verified => summary.verified += 1,
                Verdict::Inaccurate => summary.inaccurate += 1,
                Verdict::False => summary.false_count += 1,
                Verdict::Inconclusive => summary.inconclusive += 1,
            }
            if r.result.origin != VerdictOrigin::Structured {
                summary.degraded += 1;
            }
        }
        summary
    }
}

/// Per-claim detail plus summary counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactCheckReport {
    pub summary: VerdictSummary,
    pub results: Vec<ClaimResult>,
}

impl FactCheckReport {
    pub fn new(results: Vec<ClaimResult>) -> Self {
        Self {
            summary: VerdictSummary::from_results(&results),
            results,
        }
    }
}

/// Terminal state of a pipeline run.
///
/// `NoClaims` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PipelineOutcome {
    NoClaims,
    Checked(FactCheckReport),
}

impl PipelineOutcome {
    pub fn report(&self) -> Option<&FactCheckReport> {
        match self {
            Self::NoClaims => None,
            Self::Checked(report) => Some(report),
        }
    }
}
