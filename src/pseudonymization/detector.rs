//! Regex-based name detector
//!
//! The pattern is a syntactic heuristic: two consecutive capitalized words,
//! each an uppercase letter followed by lowercase letters, with word
//! boundaries on both ends. It misses single-token, hyphenated, and
//! non-Latin names, and false-positives on any capitalized two-word phrase
//! ("New York"). That behavior is intentionally preserved as-is to keep the
//! tool predictable.

use crate::domain::{PseudonymError, Result};
use regex::Regex;

/// Matches "Firstname Lastname" shaped spans
const NAME_PATTERN: &str = r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b";

/// Detector for name-shaped spans in document text
pub struct NameDetector {
    pattern: Regex,
}

impl NameDetector {
    /// Create a detector with the built-in name pattern
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(NAME_PATTERN).map_err(|e| {
            PseudonymError::Unexpected(format!("Failed to compile name pattern: {e}"))
        })?;
        Ok(Self { pattern })
    }

    /// The compiled pattern, for non-overlapping left-to-right matching
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Count non-overlapping matches in a text
    pub fn count_matches(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}
