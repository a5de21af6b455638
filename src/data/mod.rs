// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the bytes on disk and a parsed Document:
//
//   file / stdin
//       │
//       ▼
//   FileLoader / StdinLoader → exact text, or NotFound / ReadError
//       │
//       ▼
//   DocumentParser
//       ├─ Preprocessor      → normalised copy for structure only
//       ├─ Sectioner         → cuts at heading markers, resolves fences
//       └─ BlockSplitter     → prose / list / code
//       │
//       ▼
//   Document
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the artifact from a file or stdin
pub mod loader;

/// Normalises text before structural parsing
pub mod preprocessor;

/// Splits text at heading markers and extracts fenced code
pub mod sectioner;

/// Groups section body lines into prose, list and code blocks
pub mod blocks;

/// Runs the whole pipeline to produce a Document
pub mod parser;
