// ============================================================
// Layer 5 — Question Answering
// ============================================================
// Turns a free-text question into one of the fixed answers.
//
//   question text
//       │
//       ▼
//   Normalizer    → lowercase, clean whitespace
//       │
//       ▼
//   IdPattern     → first N-digit run → student id
//       │
//       ▼
//   StudentTable  → id → StudentRecord (Layer 4)
//       │
//       ▼
//   Intent        → first keyword by priority (Layer 3)
//       │
//       ▼
//   responses     → fixed-format answer text
//
// Reference: regex crate documentation
//            Rust Book §18 (Patterns and Matching)

/// Cleans and lowercases raw question text
pub mod normalizer;

/// Configurable student id extraction
pub mod id_pattern;

/// The fixed answer templates
pub mod responses;

/// Ties the steps together behind QuestionAnswerer
pub mod interpreter;
