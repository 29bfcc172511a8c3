// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to get from a config to
// something that can answer questions. Both the `ask` command
// and the web form sit on top of the same AskUseCase.
//
// Rules for this layer:
//   - No CSV parsing or pattern matching here (Layers 4 and 5)
//   - No printing or HTML here (Layer 1)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Runtime settings shared by the CLI and the web form
pub mod config;

// Load the dataset once and answer questions against it
pub mod ask_use_case;
