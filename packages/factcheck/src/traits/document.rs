//! Document text extraction collaborator.

use crate::error::Result;

/// Turns a binary document into plain text.
///
/// No page or layout metadata is needed downstream.
pub trait DocumentTextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String>;
}
