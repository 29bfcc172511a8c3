// ============================================================
// Layer 5 — Student Id Pattern
// ============================================================
// Finds the student id inside a free-text question.
//
// An id is the leftmost run of N ASCII digits (N = 4 unless
// configured otherwise). The match is a plain regex search, so
// in "10012" the first four digits "1001" are taken, and in
// "year 2024 student 1001" the id is 2024.
//
// `[0-9]` rather than `\d`: the regex crate's `\d` matches any
// Unicode digit, which `u32::from_str` then rejects.

use anyhow::{bail, Result};
use regex::Regex;

/// Digits allowed in an id; nine digits always fit in a u32.
pub const MAX_ID_DIGITS: usize = 9;

pub const DEFAULT_ID_DIGITS: usize = 4;

/// Compiled id-extraction rule.
#[derive(Debug, Clone)]
pub struct IdPattern {
    digits: usize,
    regex:  Regex,
}

impl IdPattern {
    /// Build a pattern for ids of exactly `digits` digits.
    pub fn new(digits: usize) -> Result<Self> {
        if digits == 0 || digits > MAX_ID_DIGITS {
            bail!("id length must be between 1 and {MAX_ID_DIGITS} digits, got {digits}");
        }
        let regex = Regex::new(&format!("[0-9]{{{digits}}}"))?;
        Ok(Self { digits, regex })
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Extract the first id in `text`, if any.
    pub fn extract(&self, text: &str) -> Option<u32> {
        self.regex
            .find(text)
            .and_then(|m| m.as_str().parse().ok())
    }
}

impl Default for IdPattern {
    fn default() -> Self {
        Self::new(DEFAULT_ID_DIGITS).expect("default id length is in range")
    }
}
