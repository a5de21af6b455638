// ============================================================
// Layer 2 — OutlineUseCase
// ============================================================
// A table of contents for the cheat sheet:
//
//    #  line  title                     code
//    1     1  SQL Cheat Sheet              0
//    2     7    1. Querying Data           3
//    3    32    2. Filtering               2
//
// Titles are indented two spaces per level below 1. With
// `--json` the same Outline is printed as JSON instead.

use std::fmt;

use anyhow::Result;
use serde::Serialize;

use crate::application::render_use_case::load_document;
use crate::domain::document::{Document, DocumentStats};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    /// 1-based position in the document
    pub index:       usize,
    pub level:       u8,
    pub line:        usize,
    pub title:       String,
    pub code_blocks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub source:  String,
    pub title:   Option<String>,
    pub entries: Vec<OutlineEntry>,
    pub stats:   DocumentStats,
}

impl From<&Document> for Outline {
    fn from(doc: &Document) -> Self {
        let entries = doc
            .sections
            .iter()
            .enumerate()
            .map(|(i, s)| OutlineEntry {
                index:       i + 1,
                level:       s.level,
                line:        s.line,
                title:       s.title.clone(),
                code_blocks: s.code_blocks().count(),
            })
            .collect();

        Self {
            source: doc.source.clone(),
            title: doc.title.clone(),
            entries,
            stats: DocumentStats::from(doc),
        }
    }
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title.as_deref().unwrap_or(&self.source))?;
        writeln!(f)?;
        writeln!(f, "{:>3}  {:>5}  {:<40}  {:>4}", "#", "line", "title", "code")?;

        for e in &self.entries {
            let indent = "  ".repeat(usize::from(e.level.saturating_sub(1)));
            let title  = format!("{indent}{}", e.title);
            writeln!(f, "{:>3}  {:>5}  {:<40}  {:>4}", e.index, e.line, title, e.code_blocks)?;
        }

        let s = &self.stats;
        writeln!(f)?;
        writeln!(
            f,
            "{} sections, {} code blocks, {} paragraphs, {} lists, {} lines, {} bytes",
            s.sections, s.code_blocks, s.prose_blocks, s.list_blocks, s.lines, s.bytes,
        )
    }
}

pub struct OutlineUseCase {
    input: String,
}

impl OutlineUseCase {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }

    pub fn execute(&self) -> Result<Outline> {
        let doc = load_document(&self.input)?;
        let outline = Outline::from(&doc);
        tracing::info!("Outlined '{}': {} sections", outline.source, outline.entries.len());
        Ok(outline)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::DocumentParser;
    use crate::domain::artifact::Artifact;

    fn outline(text: &str) -> Outline {
        Outline::from(&DocumentParser::new().parse(Artifact::new("t.md", text)))
    }

    #[test]
    fn test_entries_follow_sections() {
        let o = outline("# Sheet\nintro\n## A\n```sql\nSELECT 1;\n```\n### A.1\n## B\n");
        let got: Vec<(usize, u8, usize, &str, usize)> = o
            .entries
            .iter()
            .map(|e| (e.index, e.level, e.line, e.title.as_str(), e.code_blocks))
            .collect();

        assert_eq!(
            got,
            vec![
                (1, 1, 1, "Sheet", 0),
                (2, 2, 3, "A", 1),
                (3, 3, 7, "A.1", 0),
                (4, 2, 8, "B", 0),
            ]
        );
    }

    #[test]
    fn test_display_indents_by_level() {
        let text = outline("# Sheet\n## Sub\n").to_string();
        assert!(text.starts_with("Sheet\n"));
        assert!(text.contains("  Sub"));
        assert!(text.contains("2 sections, 0 code blocks"));
    }

    #[test]
    fn test_json_view_lists_entries_and_stats() {
        let json: serde_json::Value = serde_json::to_value(outline("# Sheet\n## Sub\ntext\n")).unwrap();
        assert_eq!(json["title"], "Sheet");
        assert_eq!(json["entries"][1]["title"], "Sub");
        assert_eq!(json["entries"][1]["line"], 2);
        assert_eq!(json["stats"]["sections"], 2);
    }

    #[test]
    fn test_execute_reads_from_disk() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.md");
        std::fs::write(&path, "# One\n## Two\n").unwrap();

        let o = OutlineUseCase::new(path.display().to_string()).execute().unwrap();
        assert_eq!(o.entries.len(), 2);
        assert_eq!(o.title.as_deref(), Some("One"));
    }
}
