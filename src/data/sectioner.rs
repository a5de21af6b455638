// ============================================================
// Layer 4 — Sectioner
// ============================================================
// Walks the normalised text line by line and cuts it at every
// ATX heading marker that is not inside a fenced code block.
//
//   # SQL Cheat Sheet          ← boundary (level 1)
//   Intro text.
//   ## 1. Selecting            ← boundary (level 2)
//   ```sql
//   # not a heading            ← inside a fence: body text
//   SELECT * FROM users;
//   ```
//
// Fences are resolved here, not later, because they decide
// whether a `#` line is a boundary at all. Everything else in
// a section body is handed on as plain lines.
//
// Markers are matched against the cleaned line. Lines between
// fences are kept exactly as they are in the input (only the
// line ending has been normalised).
//
// Heading rules:
//   - at most 3 leading spaces
//   - 1 to 6 `#`, then a space, a tab, or end of line
//   - an optional closing run of `#` is dropped from the title
//
// Fence rules:
//   - at most 3 leading spaces
//   - at least 3 backticks or tildes; the rest of the line is the info string
//   - a backtick fence's info string may not contain a backtick
//   - closed by the same character, at least as many, nothing after
//   - unclosed fences run to the end of the document

use crate::data::preprocessor::Preprocessor;
use crate::domain::section::CodeBlock;

/// A heading marker found in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub title: String,
    /// 1-based line number
    pub line:  usize,
}

/// One item of a section body, before paragraph grouping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyItem {
    Line(String),
    Code(CodeBlock),
}

/// A heading and the body that follows it.
/// The first span has no heading: it is the preamble.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionSpan {
    pub heading: Option<Heading>,
    pub body:    Vec<BodyItem>,
}

/// An open fence: which character, how long, and how far indented
struct Fence {
    ch:     char,
    len:    usize,
    indent: usize,
    info:   Option<String>,
    line:   usize,
    lines:  Vec<String>,
}

impl Fence {
    fn finish(self, closed: bool) -> CodeBlock {
        CodeBlock {
            info: self.info,
            text: self.lines.join("\n"),
            line: self.line,
            closed,
        }
    }
}

#[derive(Default)]
pub struct Sectioner {
    preprocessor: Preprocessor,
}

impl Sectioner {
    /// Create a new Sectioner
    pub fn new() -> Self {
        Self::default()
    }

    /// Split text into spans. `text` must already have `\n` line endings.
    /// The result always has at least one element (the preamble),
    /// followed by one span per heading.
    pub fn split(&self, text: &str) -> Vec<SectionSpan> {
        let mut spans   = vec![SectionSpan::default()];
        let mut fence: Option<Fence> = None;

        for (idx, original) in text.split('\n').enumerate() {
            let line_no = idx + 1;
            let cleaned = self.preprocessor.clean_line(original);
            let line    = cleaned.as_str();

            // Inside a fence every line is code until the closing marker
            if let Some(mut open) = fence.take() {
                if closes_fence(line, open.ch, open.len) {
                    push_item(&mut spans, BodyItem::Code(open.finish(true)));
                } else {
                    open.lines.push(strip_indent(original, open.indent).to_string());
                    fence = Some(open);
                }
                continue;
            }

            if let Some((ch, len, indent, info)) = opens_fence(line) {
                fence = Some(Fence { ch, len, indent, info, line: line_no, lines: Vec::new() });
                continue;
            }

            if let Some((level, title)) = parse_heading(line) {
                spans.push(SectionSpan {
                    heading: Some(Heading { level, title, line: line_no }),
                    body:    Vec::new(),
                });
                continue;
            }

            push_item(&mut spans, BodyItem::Line(line.to_string()));
        }

        if let Some(open) = fence {
            tracing::warn!("Code fence opened on line {} is never closed", open.line);
            push_item(&mut spans, BodyItem::Code(open.finish(false)));
        }

        spans
    }
}

fn push_item(spans: &mut [SectionSpan], item: BodyItem) {
    if let Some(current) = spans.last_mut() {
        current.body.push(item);
    }
}

/// Count leading spaces, rejecting lines indented 4 or more (indented code)
fn marker_indent(line: &str) -> Option<usize> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= 3).then_some(indent)
}

fn strip_indent(line: &str, indent: usize) -> &str {
    let leading = line.len() - line.trim_start_matches(' ').len();
    &line[leading.min(indent)..]
}

/// Parse an ATX heading into (level, title)
pub fn parse_heading(line: &str) -> Option<(u8, String)> {
    let indent = marker_indent(line)?;
    let rest   = &line[indent..];

    let hashes = rest.len() - rest.trim_start_matches('#').len();
    if hashes == 0 || hashes > 6 {
        return None;
    }

    let after = &rest[hashes..];
    if !(after.is_empty() || after.starts_with(' ') || after.starts_with('\t')) {
        return None;
    }

    let trimmed = after.trim();
    let without_closing = trimmed.trim_end_matches('#');
    let title = if without_closing.is_empty() {
        ""
    } else if without_closing.ends_with(' ') || without_closing.ends_with('\t') {
        without_closing.trim_end()
    } else {
        trimmed
    };

    Some((hashes as u8, title.to_string()))
}

/// Parse an opening fence into (char, run length, indent, info string)
fn opens_fence(line: &str) -> Option<(char, usize, usize, Option<String>)> {
    let indent = marker_indent(line)?;
    let rest   = &line[indent..];

    let ch = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = rest.len() - rest.trim_start_matches(ch).len();
    if len < 3 {
        return None;
    }

    let info = rest[len..].trim();
    if ch == '`' && info.contains('`') {
        return None;
    }

    let info = (!info.is_empty()).then(|| info.to_string());
    Some((ch, len, indent, info))
}

fn closes_fence(line: &str, ch: char, min_len: usize) -> bool {
    let Some(indent) = marker_indent(line) else {
        return false;
    };
    let rest = &line[indent..];
    let len  = rest.len() - rest.trim_start_matches(ch).len();

    len >= min_len && rest[len..].trim().is_empty()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn headings(spans: &[SectionSpan]) -> Vec<(u8, String, usize)> {
        spans
            .iter()
            .filter_map(|s| s.heading.as_ref())
            .map(|h| (h.level, h.title.clone(), h.line))
            .collect()
    }

    #[test]
    fn test_heading_levels_and_titles() {
        assert_eq!(parse_heading("# Title"), Some((1, "Title".into())));
        assert_eq!(parse_heading("### 3. Joins ###"), Some((3, "3. Joins".into())));
        assert_eq!(parse_heading("   ## Indented"), Some((2, "Indented".into())));
        assert_eq!(parse_heading("#"), Some((1, String::new())));
        assert_eq!(parse_heading("## C#"), Some((2, "C#".into())));
    }

    #[test]
    fn test_non_headings() {
        assert_eq!(parse_heading("#hashtag"), None);
        assert_eq!(parse_heading("####### seven"), None);
        assert_eq!(parse_heading("    # indented code"), None);
        assert_eq!(parse_heading("-- # comment"), None);
    }

    #[test]
    fn test_sections_follow_heading_order() {
        let text  = "preface\n# A\none\n## B\ntwo\n## C\n";
        let spans = Sectioner::new().split(text);

        assert_eq!(spans.len(), 4);
        assert_eq!(
            headings(&spans),
            vec![
                (1, "A".to_string(), 2),
                (2, "B".to_string(), 4),
                (2, "C".to_string(), 6),
            ]
        );
        assert_eq!(spans[0].body, vec![BodyItem::Line("preface".into())]);
    }

    #[test]
    fn test_heading_inside_fence_is_body() {
        let text  = "# A\n```sh\n# not a heading\n```\n## B";
        let spans = Sectioner::new().split(text);

        assert_eq!(headings(&spans).len(), 2);
        match &spans[1].body[0] {
            BodyItem::Code(code) => {
                assert_eq!(code.text, "# not a heading");
                assert_eq!(code.info.as_deref(), Some("sh"));
                assert_eq!(code.line, 2);
                assert!(code.closed);
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_closing_fence_must_match_char_and_length() {
        let text  = "````\n```\n~~~~\n````";
        let spans = Sectioner::new().split(text);

        match &spans[0].body[0] {
            BodyItem::Code(code) => assert_eq!(code.text, "```\n~~~~"),
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_unclosed_fence_runs_to_end() {
        let text  = "# A\n```sql\nSELECT 1;\n# B";
        let spans = Sectioner::new().split(text);

        assert_eq!(spans.len(), 2);
        match &spans[1].body[0] {
            BodyItem::Code(code) => {
                assert!(!code.closed);
                assert_eq!(code.text, "SELECT 1;\n# B");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_fence_indent_is_stripped_from_body() {
        let text  = "  ```\n    SELECT 1;\n  ```";
        let spans = Sectioner::new().split(text);

        match &spans[0].body[0] {
            BodyItem::Code(code) => assert_eq!(code.text, "  SELECT 1;"),
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_code_lines_are_kept_verbatim() {
        let body  = "SELECT 'a\u{00A0}b\u{200B}c\u{000C}d';   \n\tFROM t\u{FEFF};\t";
        let text  = format!("# T\n```sql\n{body}\n```\n");
        let spans = Sectioner::new().split(&text);

        match &spans[1].body[0] {
            BodyItem::Code(code) => assert_eq!(code.text, body),
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_markers_with_odd_spacing_are_recognised() {
        let text  = "##\u{00A0}Joins   \n```sql   \nSELECT 1;\n```\u{200B}\n";
        let spans = Sectioner::new().split(text);

        assert_eq!(headings(&spans), vec![(2, "Joins".to_string(), 1)]);
        match &spans[1].body[0] {
            BodyItem::Code(code) => {
                assert!(code.closed);
                assert_eq!(code.info.as_deref(), Some("sql"));
                assert_eq!(code.text, "SELECT 1;");
            }
            other => panic!("expected code, got {other:?}"),
        }
    }

    #[test]
    fn test_backtick_info_with_backtick_is_not_a_fence() {
        assert!(opens_fence("``` a`b").is_none());
        assert!(opens_fence("~~~ a`b").is_some());
        assert!(opens_fence("``").is_none());
    }
}
