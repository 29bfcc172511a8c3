// ============================================================
// Layer 1 — Web Presentation
// ============================================================
// The question page: one form field, one answer block.
//
//   GET  /   → empty form
//   POST /   → validate the field, answer it, render the page
//
// Like the CLI, this layer only routes and renders; answers
// come from a QuestionAnswerer built in Layer 2.
//
// Reference: axum documentation (Router, extractors)

/// Form payload and its validation rules
pub mod form;

/// HTML rendering of the question page
pub mod page;

/// axum handlers and the router
pub mod routes;

/// Binds the listener and serves the router
pub mod server;
