// ============================================================
// Layer 4 — Document Parser
// ============================================================
// Runs the structural pipeline over one Artifact:
//
//   Artifact.text
//       │
//       ▼
//   Preprocessor   → line endings normalised
//       │
//       ▼
//   Sectioner      → preamble + one span per heading marker
//                    (markers found on cleaned lines, code kept as is)
//       │
//       ▼
//   BlockSplitter  → prose / list / code blocks per span
//       │
//       ▼
//   Document       (raw text kept byte-for-byte)
//
// SQL inside code blocks is never looked at.

use crate::data::{blocks::BlockSplitter, preprocessor::Preprocessor, sectioner::Sectioner};
use crate::domain::artifact::Artifact;
use crate::domain::document::Document;
use crate::domain::section::Section;

pub struct DocumentParser {
    preprocessor: Preprocessor,
    sectioner:    Sectioner,
    splitter:     BlockSplitter,
}

impl DocumentParser {
    /// Create a parser with the default pipeline stages
    pub fn new() -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            sectioner:    Sectioner::new(),
            splitter:     BlockSplitter::new(),
        }
    }

    /// Build a Document from an Artifact. Parsing cannot fail: any
    /// readable text is a valid (possibly section-less) document.
    pub fn parse(&self, artifact: Artifact) -> Document {
        let text = self.preprocessor.normalise_line_endings(&artifact.text);
        let mut spans = self.sectioner.split(&text).into_iter();

        let preamble = spans
            .next()
            .map(|span| self.splitter.split(span.body))
            .unwrap_or_default();

        let sections: Vec<Section> = spans
            .filter_map(|span| {
                let heading = span.heading?;
                let blocks  = self.splitter.split(span.body);
                Some(Section::new(heading.title, heading.level, heading.line, blocks))
            })
            .collect();

        let title = sections
            .iter()
            .find(|s| s.level == 1)
            .map(|s| s.title.clone());

        let doc = Document {
            source: artifact.source,
            raw: artifact.text,
            title,
            preamble,
            sections,
        };

        tracing::debug!(
            "Parsed '{}': {} sections, {} code blocks",
            doc.source,
            doc.sections.len(),
            doc.code_block_count(),
        );

        doc
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}
