// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that don't belong to any one layer:
//
//   config_file.rs — Reading and writing AppConfig as JSON.
//                    The CLI loads it before applying flags;
//                    `init-config` writes the defaults out so
//                    there is a file to edit.
//
// Reference: Rust Book §9 (Error Handling with anyhow)
//            serde_json crate documentation

/// JSON persistence for AppConfig
pub mod config_file;
