//! Verdict records produced for each claim.

use serde::{Deserialize, Serialize};

/// Most source URLs attached to a single verdict.
pub const MAX_SOURCES: usize = 3;

/// Judgment on a claim's truth status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Verified,
    Inaccurate,
    False,
    Inconclusive,
}

impl Verdict {
    /// Normalize a model-supplied label.
    ///
    /// Case-insensitive; `TRUE` is accepted as `VERIFIED`, anything outside
    /// the three judged labels is `INCONCLUSIVE`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "VERIFIED" | "TRUE" => Self::Verified,
            "INACCURATE" => Self::Inaccurate,
            "FALSE" => Self::False,
            _ => Self::Inconclusive,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verified => "VERIFIED",
            Self::Inaccurate => "INACCURATE",
            Self::False => "FALSE",
            Self::Inconclusive => "INCONCLUSIVE",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which path produced a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictOrigin {
    /// Decoded from a well-formed JSON object
    Structured,
    /// Inferred from keywords in an unstructured response
    Fallback,
    /// Retrieval or classification failed for this claim
    Failed,
}

/// The typed outcome of checking one claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub verdict: Verdict,
    pub explanation: String,
    /// Suggested correction. Always empty for `VERIFIED`.
    pub correct_info: String,
    /// Best-effort confidence in `[0, 1]`; not calibrated.
    pub confidence: f64,
    /// Up to [`MAX_SOURCES`] URLs in retrieval order.
    pub sources: Vec<String>,
    pub origin: VerdictOrigin,
}

impl VerdictRecord {
    pub fn new(verdict: Verdict, explanation: impl Into<String>, origin: VerdictOrigin) -> Self {
        Self {
            verdict,
            explanation: explanation.into(),
            correct_info: String::new(),
            confidence: 0.0,
            sources: Vec::new(),
            origin,
        }
    }

    /// Set the correction. Dropped for `VERIFIED` verdicts.
    pub fn with_correct_info(mut self, correct_info: impl Into<String>) -> Self {
        self.correct_info = if self.verdict == Verdict::Verified {
            String::new()
        } else {
            correct_info.into()
        };
        self
    }

    /// Set the confidence, clamped into `[0, 1]`. Non-finite values become 0.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = if confidence.is_finite() {
            confidence.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    /// Attach source URLs, keeping the first [`MAX_SOURCES`].
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources
            .into_iter()
            .take(MAX_SOURCES)
            .map(Into::into)
            .collect();
        self
    }

    /// INCONCLUSIVE record for a claim whose checks could not complete.
    pub fn failed(reason: impl std::fmt::Display) -> Self {
        Self::new(
            Verdict::Inconclusive,
            format!("Verification could not be completed: {}", reason),
            VerdictOrigin::Failed,
        )
    }

    /// Whether this verdict came from a lower-fidelity path.
    pub fn is_degraded(&self) -> bool {
        self.origin != VerdictOrigin::Structured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_normalization() {
        assert_eq!(Verdict::from_label("verified"), Verdict::Verified);
        assert_eq!(Verdict::from_label("true"), Verdict::Verified);
        assert_eq!(Verdict::from_label("Inaccurate"), Verdict::Inaccurate);
        assert_eq!(Verdict::from_label("FALSE"), Verdict::False);
        assert_eq!(Verdict::from_label("maybe"), Verdict::Inconclusive);
        assert_eq!(Verdict::from_label(""), Verdict::Inconclusive);
        assert_eq!(
            Verdict::from_label("VERIFIED|INACCURATE|FALSE"),
            Verdict::Inconclusive
        );
    }

    #[test]
    fn test_padded_label_trimmed() {
        assert_eq!(Verdict::from_label(" false "), Verdict::False);
        assert_eq!(Verdict::from_label("\tVerified\n"), Verdict::Verified);
    }

    #[test]
    fn test_verified_drops_correction() {
        let record = VerdictRecord::new(Verdict::Verified, "ok", VerdictOrigin::Structured)
            .with_correct_info("should not appear");
        assert!(record.correct_info.is_empty());

        let record = VerdictRecord::new(Verdict::False, "no", VerdictOrigin::Structured)
            .with_correct_info("The tower is 330 m tall.");
        assert_eq!(record.correct_info, "The tower is 330 m tall.");
    }

    #[test]
    fn test_confidence_clamped() {
        let base = || VerdictRecord::new(Verdict::False, "", VerdictOrigin::Structured);
        assert_eq!(base().with_confidence(1.7).confidence, 1.0);
        assert_eq!(base().with_confidence(-0.2).confidence, 0.0);
        assert_eq!(base().with_confidence(f64::NAN).confidence, 0.0);
        assert_eq!(base().with_confidence(0.8).confidence, 0.8);
    }

    #[test]
    fn test_sources_capped_in_order() {
        let record = VerdictRecord::new(Verdict::Verified, "", VerdictOrigin::Structured)
            .with_sources(["a", "b", "c", "d", "e"]);
        assert_eq!(record.sources, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_failed_record() {
        let record = VerdictRecord::failed("search error: 503");
        assert_eq!(record.verdict, Verdict::Inconclusive);
        assert_eq!(record.origin, VerdictOrigin::Failed);
        assert!(record.explanation.contains("search error: 503"));
        assert!(record.is_degraded());
    }

    #[test]
    fn test_serialized_shape() {
        let record = VerdictRecord::new(Verdict::Inaccurate, "x", VerdictOrigin::Fallback);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["verdict"], "INACCURATE");
        assert_eq!(json["origin"], "fallback");
    }
}
