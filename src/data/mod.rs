// ============================================================
// Layer 4 — Data
// ============================================================
// Turns the student CSV on disk into the read-only table every
// request looks students up in:
//
//   students.csv
//       │
//       ▼
//   CsvStudentLoader  → parses rows into StudentRecords
//       │
//       ▼
//   StudentTable      → id → StudentRecord, built once, never mutated
//
// Reference: csv crate documentation
//            Rust Book §8 (Collections)

/// Reads the student CSV using the csv crate
pub mod loader;

/// The in-memory id → record table
pub mod dataset;
