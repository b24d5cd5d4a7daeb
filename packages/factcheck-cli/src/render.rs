//! Report rendering for the terminal.

use colored::{ColoredString, Colorize};
use factcheck::{ClaimResult, FactCheckReport, PipelineOutcome, Verdict, VerdictOrigin, VerdictSummary};

pub const NO_CLAIMS_MESSAGE: &str = "No factual claims found.";

pub fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Verified => "VERIFIED",
        Verdict::Inaccurate => "INACCURATE / OUTDATED",
        Verdict::False => "FALSE",
        Verdict::Inconclusive => "INCONCLUSIVE",
    }
}

fn colored_label(verdict: Verdict) -> ColoredString {
    let label = verdict_label(verdict);
    match verdict {
        Verdict::Verified => label.green().bold(),
        Verdict::Inaccurate => label.yellow().bold(),
        Verdict::False => label.red().bold(),
        Verdict::Inconclusive => label.dimmed().bold(),
    }
}

/// Note shown next to verdicts that did not come from a structured response.
fn origin_marker(origin: VerdictOrigin) -> Option<&'static str> {
    match origin {
        VerdictOrigin::Structured => None,
        VerdictOrigin::Fallback => Some("(low confidence: unstructured model response)"),
        VerdictOrigin::Failed => Some("(check failed)"),
    }
}

/// Human-readable report: summary dashboard, then per-claim detail.
pub fn render_text(outcome: &PipelineOutcome) -> String {
    match outcome {
        PipelineOutcome::NoClaims => format!("{}\n", NO_CLAIMS_MESSAGE.yellow()),
        PipelineOutcome::Checked(report) => render_report(report),
    }
}

pub fn render_json(outcome: &PipelineOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

fn render_report(report: &FactCheckReport) -> String {
    let mut lines = render_summary(&report.summary);
    lines.push(String::new());
    lines.push("Detailed Claim Analysis".bold().to_string());

    for (i, result) in report.results.iter().enumerate() {
        lines.push(String::new());
        lines.extend(render_claim(i + 1, result));
    }

    lines.push(String::new());
    lines.join("\n")
}

fn render_summary(summary: &VerdictSummary) -> Vec<String> {
    vec![
        "Fact Check Summary".bold().to_string(),
        format!("  Total claims:  {}", summary.total),
        format!("  {}  {}", format!("{:<13}", "Verified:").green(), summary.verified),
        format!("  {}  {}", format!("{:<13}", "Inaccurate:").yellow(), summary.inaccurate),
        format!("  {}  {}", format!("{:<13}", "False:").red(), summary.false_count),
        format!("  {}  {}", format!("{:<13}", "Inconclusive:").dimmed(), summary.inconclusive),
    ]
}

fn render_claim(number: usize, result: &ClaimResult) -> Vec<String> {
    let record = &result.result;
    let mut lines = vec![
        format!("{}. {}", number, result.claim.text().bold()),
        format!("   Category: {}", result.claim.category()),
    ];

    let mut verdict = format!("   Verdict: {}", colored_label(record.verdict));
    if let Some(marker) = origin_marker(record.origin) {
        verdict.push_str(&format!(" {}", marker.dimmed()));
    }
    lines.push(verdict);

    if !record.explanation.is_empty() {
        lines.push(format!("   Explanation: {}", record.explanation));
    }

    if record.verdict != Verdict::Verified && !record.correct_info.is_empty() {
        lines.push(format!("   Suggested correction: {}", record.correct_info.cyan()));
    }

    if !record.sources.is_empty() {
        lines.push("   Sources:".to_string());
        lines.extend(record.sources.iter().map(|url| format!("     - {}", url)));
    }

    lines
}
