// ============================================================
// Layer 3 — Section and Block Domain Types
// ============================================================
// A Section is one heading marker plus everything up to the
// next heading marker. Its body is an ordered list of Blocks:
//
//   Prose → a paragraph of explanatory text
//   List  → a paragraph made only of bullet lines
//   Code  → a fenced example, kept as opaque text
//
// Code blocks are never parsed. The SQL inside them is just
// characters as far as this crate is concerned.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::Serialize;

/// One fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Text after the opening fence (e.g. `sql`), if any
    pub info: Option<String>,

    /// Lines between the fences, joined with `\n`, no trailing newline
    pub text: String,

    /// 1-based line number of the opening fence
    pub line: usize,

    /// False when the document ended before a closing fence
    pub closed: bool,
}

impl CodeBlock {
    /// First word of the info string, used as the language tag
    pub fn language(&self) -> Option<&str> {
        self.info
            .as_deref()
            .and_then(|info| info.split_whitespace().next())
    }
}

/// A single element of a section body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Prose { text: String },
    List { items: Vec<String> },
    Code(CodeBlock),
}

impl Block {
    /// True for fenced code blocks
    pub fn is_code(&self) -> bool {
        matches!(self, Block::Code(_))
    }
}

/// A titled, ordered run of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text without the `#` markers
    pub title: String,

    /// Heading level, 1 to 6
    pub level: u8,

    /// 1-based line number of the heading
    pub line: usize,

    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(title: impl Into<String>, level: u8, line: usize, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            level,
            line,
            blocks,
        }
    }

    /// Iterate over the fenced code blocks of this section
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Code(code) => Some(code),
            _ => None,
        })
    }

    /// URL-friendly anchor derived from the title.
    ///
    /// Lowercases ASCII letters, keeps digits, and turns every other
    /// run of characters into a single `-`.
    ///   "1. Basic Queries" → "1-basic-queries"
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.title.len());
        let mut pending_dash = false;

        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                slug.push(c.to_ascii_lowercase());
                pending_dash = false;
            } else {
                pending_dash = true;
            }
        }

        slug
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_collapses_punctuation() {
        let s = Section::new("1. Basic Queries", 2, 3, Vec::new());
        assert_eq!(s.slug(), "1-basic-queries");
    }

    #[test]
    fn test_slug_drops_edge_punctuation() {
        let s = Section::new("  JOINs (inner & outer)!  ", 2, 1, Vec::new());
        assert_eq!(s.slug(), "joins-inner-outer");
    }

    #[test]
    fn test_code_blocks_filters_prose() {
        let code = CodeBlock {
            info:   Some("sql".into()),
            text:   "SELECT 1;".into(),
            line:   5,
            closed: true,
        };
        let s = Section::new(
            "Select",
            2,
            1,
            vec![
                Block::Prose { text: "Pick columns.".into() },
                Block::Code(code.clone()),
            ],
        );

        let found: Vec<_> = s.code_blocks().collect();
        assert_eq!(found, vec![&code]);
    }

    #[test]
    fn test_language_is_first_info_word() {
        let code = CodeBlock {
            info:   Some("sql title=example".into()),
            text:   String::new(),
            line:   1,
            closed: true,
        };
        assert_eq!(code.language(), Some("sql"));
    }
}
