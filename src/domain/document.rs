// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// The cheat sheet after structural parsing: an optional preamble
// followed by sections in the order their headings appear.
//
// `raw` keeps the artifact text byte-for-byte. It is skipped when
// serialising so the JSON view only carries the structure.
//
// A Document is built once and then only read. There are no
// mutation methods.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::section::{Block, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Where the artifact came from
    pub source: String,

    /// The unmodified artifact text
    #[serde(skip)]
    pub raw: String,

    /// Text of the first level-1 heading, if there is one
    pub title: Option<String>,

    /// Blocks that appear before the first heading
    pub preamble: Vec<Block>,

    pub sections: Vec<Section>,
}

impl Document {
    /// Number of fenced code blocks across the preamble and all sections
    pub fn code_block_count(&self) -> usize {
        self.blocks().filter(|b| b.is_code()).count()
    }

    /// One anchor per section, unique within the document.
    ///
    /// The first section with a given slug keeps it; later ones get
    /// `-1`, `-2`, … appended, skipping any name already taken.
    /// A title with no usable characters becomes `section`.
    ///   "Example", "Example", "Example-1" → "example", "example-1", "example-1-1"
    pub fn anchors(&self) -> Vec<String> {
        let mut taken:   HashSet<String>        = HashSet::new();
        let mut repeats: HashMap<String, usize> = HashMap::new();

        self.sections
            .iter()
            .map(|section| {
                let mut base = section.slug();
                if base.is_empty() {
                    base = "section".to_string();
                }

                let mut anchor = base.clone();
                while taken.contains(&anchor) {
                    let n = repeats.entry(base.clone()).or_insert(0);
                    *n += 1;
                    anchor = format!("{base}-{n}");
                }

                taken.insert(anchor.clone());
                anchor
            })
            .collect()
    }

    /// Every block in document order, preamble first
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.preamble
            .iter()
            .chain(self.sections.iter().flat_map(|s| s.blocks.iter()))
    }
}

// ─── Document Stats ──────────────────────────────────────────────────────────
/// Counts reported by `outline` and logged after parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    pub sections:     usize,
    pub code_blocks:  usize,
    pub prose_blocks: usize,
    pub list_blocks:  usize,
    pub lines:        usize,
    pub bytes:        usize,
}

impl From<&Document> for DocumentStats {
    fn from(doc: &Document) -> Self {
        let mut stats = DocumentStats {
            sections: doc.sections.len(),
            lines:    doc.raw.lines().count(),
            bytes:    doc.raw.len(),
            ..Default::default()
        };

        for block in doc.blocks() {
            match block {
                Block::Prose { .. } => stats.prose_blocks += 1,
                Block::List { .. }  => stats.list_blocks += 1,
                Block::Code(_)      => stats.code_blocks += 1,
            }
        }

        stats
    }
}
