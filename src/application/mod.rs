// ============================================================
// Layer 2 — Application Layer (Use Cases)
// ============================================================
// Each use case wires the data, render and infra layers for one
// CLI command. The CLI never calls those layers directly.
//
//   render_use_case.rs  — load → parse → render → write
//   outline_use_case.rs — table of contents and counts
//   check_use_case.rs   — structural lint of the markup
//
// Reference: Rust Book §7 (Packages, Crates and Modules)

pub mod render_use_case;
pub mod outline_use_case;
pub mod check_use_case;
