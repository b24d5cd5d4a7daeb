//! Data model shared by the pipeline stages.

pub mod claim;
pub mod evidence;
pub mod report;
pub mod verdict;

/// Truncate to at most `max_chars` Unicode scalar values.
///
/// Model inputs are budgeted in characters, never split mid-character.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
