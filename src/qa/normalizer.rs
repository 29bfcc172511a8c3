// ============================================================
// Layer 5 — Question Normaliser
// ============================================================
// Prepares raw form input for keyword and id matching.
//
// Text typed into a browser form or pasted from elsewhere can
// carry:
//   - Non-breaking spaces (U+00A0)
//   - Zero-width spaces (U+200B) and byte order marks
//   - Tabs and carriage returns
//   - Mixed case ("Math", "MATHS", "Details")
//
// Cleaning steps (applied in order):
//   1. Map Unicode whitespace variants and control characters to a space
//   2. Lowercase
//   3. Trim the ends
//
// Keyword checks are plain substring tests, so nothing inside
// the question is collapsed or removed.
//
// Reference: Rust Book §8 (Strings in Rust)

pub struct Normalizer;

impl Normalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalise a question. Takes a &str and returns an owned String.
    pub fn normalize(&self, question: &str) -> String {
        let spaced: String = question
            .chars()
            .map(|c| match c {
                '\u{00A0}' | '\u{200B}' | '\u{FEFF}' => ' ',
                c if c.is_control() => ' ',
                c => c,
            })
            .collect();

        spaced.to_lowercase().trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
