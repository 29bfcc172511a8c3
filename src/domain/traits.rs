// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer programs against these traits, not the
// concrete CSV loader or interpreter, so tests can swap in an
// in-memory table and the web layer can hold any answerer.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::student::StudentRecord;

// ─── StudentSource ────────────────────────────────────────────────────────────
/// Any component that can produce the full set of student records.
///
/// Implementations:
///   - CsvStudentLoader → reads a CSV file with a header row
pub trait StudentSource {
    /// Load every record from this source.
    /// Called once at startup; an error here is fatal.
    fn load_all(&self) -> Result<Vec<StudentRecord>>;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer a free-text question.
///
/// Every recognised failure (no id, unknown id, unknown intent)
/// is itself an answer, so this never returns an error.
pub trait QuestionAnswerer {
    fn answer(&self, question: &str) -> String;
}
