//! Web evidence gathered for a single claim.

use serde::{Deserialize, Serialize};

use super::truncate_chars;
use super::verdict::MAX_SOURCES;

/// One search result reduced to what the classifier needs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Content snippet (empty when the search result had none)
    pub snippet: String,

    /// Source URL (empty when the search result had none)
    pub url: String,
}

impl EvidenceItem {
    pub fn new(snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            snippet: snippet.into(),
            url: url.into(),
        }
    }
}

/// Evidence for one claim, in retrieval relevance order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evidence {
    pub items: Vec<EvidenceItem>,
}

impl Evidence {
    pub fn new(items: Vec<EvidenceItem>) -> Self {
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Snippets joined by blank lines, truncated to `max_chars`.
    pub fn combined_text(&self, max_chars: usize) -> String {
        let joined = self
            .items
            .iter()
            .map(|item| item.snippet.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        truncate_chars(&joined, max_chars).to_string()
    }

    /// Non-empty URLs of the first [`MAX_SOURCES`] items, in retrieval order.
    pub fn source_urls(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .take(MAX_SOURCES)
            .map(|item| item.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Evidence {
        Evidence::new(vec![
            EvidenceItem::new("first", "https://a.example"),
            EvidenceItem::new("", ""),
            EvidenceItem::new("third", "https://c.example"),
        ])
    }

    #[test]
    fn test_combined_text_joins_snippets() {
        assert_eq!(sample().combined_text(1000), "first\n\n\n\nthird");
    }

    #[test]
    fn test_combined_text_truncates() {
        let evidence = Evidence::new(vec![EvidenceItem::new("x".repeat(20), "u")]);
        assert_eq!(evidence.combined_text(12).chars().count(), 12);
    }

    #[test]
    fn test_source_urls_skip_empty() {
        let evidence = sample();
        let urls: Vec<_> = evidence.source_urls().collect();
        assert_eq!(urls, vec!["https://a.example", "https://c.example"]);
    }

    #[test]
    fn test_source_urls_only_from_leading_items() {
        let evidence = Evidence::new(
            ["https://1.example", "", "https://3.example", "https://4.example", "https://5.example"]
                .into_iter()
                .map(|url| EvidenceItem::new("snippet", url))
                .collect(),
        );

        let urls: Vec<_> = evidence.source_urls().collect();
        assert_eq!(urls, vec!["https://1.example", "https://3.example"]);
    }
}
