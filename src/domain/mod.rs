// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits describing the cheat sheet.
//
// Rules for this layer:
//   - NO file I/O
//   - NO clap types
//   - NO rendering logic
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The raw text exactly as it was read
pub mod artifact;

// The parsed document: title, preamble and ordered sections
pub mod document;

// Sections and the prose/list/code blocks inside them
pub mod section;

// Typed loader failures
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
