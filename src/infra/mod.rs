// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Side effects that are not part of loading or rendering:
//
//   output.rs       — where rendered text goes (stdout or a file)
//   config_store.rs — RenderConfig saved/loaded as JSON
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Stdout / file output sink
pub mod output;

/// RenderConfig persistence
pub mod config_store;
