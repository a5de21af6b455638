// ============================================================
// Layer 3 — Artifact Domain Type
// ============================================================
// The bytes of the cheat sheet as they came off disk (or stdin),
// already checked to be UTF-8 text. Nothing here is cleaned or
// reinterpreted: renderers that promise identity output read
// `text` directly.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// The path the text was read from, or `<stdin>`
    pub source: String,

    /// The full, unmodified text
    pub text: String,
}

impl Artifact {
    /// Create a new Artifact.
    ///
    /// Example:
    ///   let a = Artifact::new("docs/sql-cheatsheet.md", "# SQL Cheat Sheet\n");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// Size of the artifact in bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }
}
