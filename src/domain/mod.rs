// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits that describe what the
// system talks about: students, the kinds of question it can
// answer, and the seams other layers plug into.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO axum, csv, or regex types
//   - Only plain Rust structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// One row of the student dataset
pub mod student;

// The keyword-driven intents a question can carry
pub mod intent;

// Core abstractions (traits) that other layers implement
pub mod traits;
