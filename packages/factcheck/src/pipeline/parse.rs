//! Tolerant parsing of verdict responses.
//!
//! Model output is untrusted input. [`parse_verdict`] is total: structured
//! JSON is preferred, and anything else falls back to keyword
//! classification so the pipeline never stalls on a malformed response.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::types::truncate_chars;
use crate::types::verdict::{Verdict, VerdictOrigin, VerdictRecord};

/// Longest explanation produced by the keyword fallback.
pub const FALLBACK_EXPLANATION_CHARS: usize = 500;

static RE_CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").unwrap());

static RE_VERIFIED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:verified|true|correct)\b").unwrap());
static RE_FALSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:false|wrong)\b").unwrap());
static RE_INACCURATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:inaccurate|outdated|partially)\b").unwrap());

/// Which path produced a parsed verdict.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedVerdict {
    Structured(VerdictRecord),
    Fallback(VerdictRecord),
}

impl ParsedVerdict {
    pub fn record(&self) -> &VerdictRecord {
        match self {
            Self::Structured(r) | Self::Fallback(r) => r,
        }
    }

    pub fn into_record(self) -> VerdictRecord {
        match self {
            Self::Structured(r) | Self::Fallback(r) => r,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Remove markdown code fences anywhere in the text and trim it.
pub fn strip_code_fences(raw: &str) -> String {
    RE_CODE_FENCE.replace_all(raw, "").trim().to_string()
}

/// Parse a classifier response into a verdict record.
pub fn parse_verdict(raw: &str) -> ParsedVerdict {
    let normalized = strip_code_fences(raw);

    match serde_json::from_str::<Value>(&normalized) {
        Ok(Value::Object(map)) => ParsedVerdict::Structured(from_object(&map)),
        _ => ParsedVerdict::Fallback(from_keywords(&normalized)),
    }
}

/// Shorthand for `parse_verdict(raw).into_record()`.
pub fn parse(raw: &str) -> VerdictRecord {
    parse_verdict(raw).into_record()
}

fn from_object(map: &Map<String, Value>) -> VerdictRecord {
    let verdict = Verdict::from_label(&field_text(map, "verdict"));

    VerdictRecord::new(verdict, field_text(map, "explanation"), VerdictOrigin::Structured)
        .with_correct_info(field_text(map, "correct_info"))
        .with_confidence(confidence(map.get("confidence")))
}

/// Keyword classification. Precedence: verified, then false, then inaccurate.
fn from_keywords(text: &str) -> VerdictRecord {
    let verdict = if RE_VERIFIED.is_match(text) {
        Verdict::Verified
    } else if RE_FALSE.is_match(text) {
        Verdict::False
    } else if RE_INACCURATE.is_match(text) {
        Verdict::Inaccurate
    } else {
        Verdict::Inconclusive
    };

    let explanation = truncate_chars(text.trim(), FALLBACK_EXPLANATION_CHARS);
    VerdictRecord::new(verdict, explanation, VerdictOrigin::Fallback)
}

/// Coerce a field to trimmed text. Missing and null become empty.
fn field_text(map: &Map<String, Value>, key: &str) -> String {
    match map.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => other.to_string().trim().to_string(),
    }
}

fn confidence(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
