//! LLM prompts for claim extraction and verdict classification.

/// System prompt for pulling verifiable claims out of a document.
pub const EXTRACT_CLAIMS_PROMPT: &str = r#"You extract verifiable factual claims from documents.

Keep only claims that can be checked against public sources and that contain:
- statistics or percentages
- dates or time spans
- financial figures
- technical specifications

Skip opinions, predictions, marketing language and generic statements.

Respond with a JSON array and nothing else:
[
  {"claim": "the claim as a standalone sentence", "category": "statistic|date|financial|technical|other"}
]"#;

/// System prompt for judging one claim against retrieved evidence.
pub const CLASSIFY_VERDICT_PROMPT: &str = r#"You are a professional fact checker and editor.

You receive a CLAIM and EVIDENCE gathered from the web.

1. Classify the claim as exactly one of:
- VERIFIED: the evidence supports the claim
- INACCURATE: the claim is outdated or only partially correct
- FALSE: the evidence contradicts the claim

2. When the claim is INACCURATE or FALSE, write a corrected sentence suitable for publication.

3. Rate your confidence between 0.0 and 1.0.

Respond with a JSON object and nothing else:
{
  "verdict": "VERIFIED|INACCURATE|FALSE",
  "explanation": "one or two sentences citing the evidence",
  "correct_info": "corrected version of the claim, empty when VERIFIED",
  "confidence": 0.0
}"#;

/// Format the user content for verdict classification.
pub fn format_verdict_input(claim: &str, evidence: &str) -> String {
    format!("CLAIM:\n{}\n\nEVIDENCE:\n{}", claim, evidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_input_layout() {
        assert_eq!(
            format_verdict_input("Water boils at 90C.", "It boils at 100C."),
            "CLAIM:\nWater boils at 90C.\n\nEVIDENCE:\nIt boils at 100C."
        );
    }

    #[test]
    fn test_prompts_request_json() {
        assert!(EXTRACT_CLAIMS_PROMPT.contains("JSON array"));
        assert!(CLASSIFY_VERDICT_PROMPT.contains("\"verdict\""));
        assert!(CLASSIFY_VERDICT_PROMPT.contains("\"confidence\""));
    }
}
