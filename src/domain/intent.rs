// ============================================================
// Layer 3 — Question Intent
// ============================================================
// Which response template a question asks for. Intents are
// picked by plain substring checks on the lowercased question,
// first match wins, in the order of PRIORITY below:
//
//   info / details  >  math  >  science  >  social  >  email
//
// So "info and math for 1001" is an Info question, and
// "math email 1001" is a Maths question.

/// The kinds of question the interpreter knows how to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Full record dump: id, name, class, email
    Info,
    Maths,
    Science,
    Social,
    Email,
}

/// Keyword table in priority order. An intent matches when ANY
/// of its keywords is a substring of the question.
const PRIORITY: [(Intent, &[&str]); 5] = [
    (Intent::Info,    &["info", "details"]),
    (Intent::Maths,   &["math"]),
    (Intent::Science, &["science"]),
    (Intent::Social,  &["social"]),
    (Intent::Email,   &["email"]),
];

impl Intent {
    /// Detect the intent of an already-lowercased question.
    /// Returns None when no keyword is present.
    pub fn detect(question: &str) -> Option<Intent> {
        PRIORITY
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| question.contains(k)))
            .map(|(intent, _)| *intent)
    }
}
