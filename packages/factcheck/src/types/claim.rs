//! Extracted factual claims.

use serde::{Deserialize, Serialize};

/// Domain a claim belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimCategory {
    Statistic,
    Date,
    Financial,
    Technical,
    #[default]
    Other,
}

impl ClaimCategory {
    /// Parse a category label. Unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "statistic" | "statistics" => Self::Statistic,
            "date" | "dates" => Self::Date,
            "financial" => Self::Financial,
            "technical" => Self::Technical,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statistic => "statistic",
            Self::Date => "date",
            Self::Financial => "financial",
            Self::Technical => "technical",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ClaimCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verifiable factual statement pulled from a document.
///
/// Text is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claim {
    text: String,
    category: ClaimCategory,
}

impl Claim {
    /// Create a claim. Returns `None` when the text is blank.
    pub fn new(text: impl Into<String>, category: ClaimCategory) -> Option<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            category,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> ClaimCategory {
        self.category
    }
}
