// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer talks to loaders and renderers only
// through these traits:
//   - FileLoader implements ArtifactSource
//   - RawRenderer, TextRenderer, HtmlRenderer, JsonRenderer
//     implement Renderer
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Trait Objects)

use anyhow::Result;

use crate::domain::artifact::Artifact;
use crate::domain::document::Document;
use crate::domain::error::LoadError;

// ─── ArtifactSource ───────────────────────────────────────────────────────────
/// Anything the cheat sheet text can be loaded from.
pub trait ArtifactSource {
    /// Read the whole artifact. Either all of it is returned or an error is.
    fn load(&self) -> std::result::Result<Artifact, LoadError>;
}

// ─── Renderer ─────────────────────────────────────────────────────────────────
/// Turns a parsed Document into a display format.
///
/// Implementations must be deterministic: rendering the same
/// Document twice yields the same string.
pub trait Renderer: Send + Sync {
    fn render(&self, doc: &Document) -> Result<String>;
}
