// ============================================================
// Layer 2 — RenderUseCase
// ============================================================
// Orchestrates one render:
//
//   Step 1: Load the artifact     (Layer 4 - data)
//   Step 2: Parse its structure   (Layer 4 - data)
//   Step 3: Render to the format  (Layer 5 - render)
//   Step 4: Write to the sink     (Layer 6 - infra)
//
// Either every step succeeds or the first failure is returned;
// nothing is written after a failed load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{loader::source_for, parser::DocumentParser};
use crate::domain::document::Document;
use crate::domain::traits::ArtifactSource;
use crate::infra::output::OutputSink;
use crate::render::{renderer_for, Format};

pub const DEFAULT_INPUT: &str = "docs/sql-cheatsheet.md";

// ─── Render Configuration ────────────────────────────────────────────────────
// Serialisable so it can be saved with --save-config and reused with --config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Path to the artifact, or `-` for stdin
    pub input:      String,
    /// Output file; stdout when absent
    pub output:     Option<String>,
    pub format:     Format,
    /// HTML only: emit a full page instead of a fragment
    pub standalone: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input:      DEFAULT_INPUT.to_string(),
            output:     None,
            format:     Format::Raw,
            standalone: false,
        }
    }
}

pub struct RenderUseCase {
    config: RenderConfig,
}

impl RenderUseCase {
    /// Create a new RenderUseCase from resolved settings
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Run all four steps. Nothing is written unless rendering succeeded.
    pub fn execute(&self) -> Result<()> {
        let rendered = self.render()?;
        OutputSink::from_arg(self.config.output.as_deref()).write(&rendered)
    }

    /// Steps 1 to 3, without writing anything
    pub fn render(&self) -> Result<String> {
        let doc = load_document(&self.config.input)?;

        let renderer = renderer_for(self.config.format, self.config.standalone);
        let rendered = renderer
            .render(&doc)
            .with_context(|| format!("Cannot render '{}' as {}", doc.source, self.config.format.name()))?;

        tracing::info!(
            "Rendered '{}' as {} ({} sections, {} bytes)",
            doc.source,
            self.config.format.name(),
            doc.sections.len(),
            rendered.len(),
        );
        Ok(rendered)
    }
}

/// Load and parse the artifact named by a CLI input argument.
/// Shared by every use case.
pub fn load_document(input: &str) -> Result<Document> {
    let artifact = source_for(input)
        .load()
        .with_context(|| format!("Cannot load cheat sheet from '{input}'"))?;
    Ok(DocumentParser::new().parse(artifact))
}
