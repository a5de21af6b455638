// ============================================================
// Layer 4 — Block Splitter
// ============================================================
// Groups the plain lines of a section body into paragraphs and
// passes fenced code through untouched.
//
// Example body:
//   Use SELECT to read rows.        ┐
//   Columns are comma separated.    ┘ Prose
//
//   - `*` selects every column      ┐
//   - `AS` renames a column         ┘ List
//   ```sql                          ┐
//   SELECT id AS user_id FROM t;    │ Code
//   ```                             ┘
//
// A paragraph ends at a blank line or at a code block. A
// paragraph becomes a List when it starts with a bullet and
// every following line is either another bullet or an
// indented continuation of the previous item.

use crate::data::sectioner::BodyItem;
use crate::domain::section::Block;

const BULLETS: [&str; 3] = ["- ", "* ", "+ "];

pub struct BlockSplitter;

impl BlockSplitter {
    /// Create a new BlockSplitter
    pub fn new() -> Self {
        Self
    }

    /// Group one section body into blocks, in source order.
    /// Blank lines only separate paragraphs; they never become blocks.
    pub fn split(&self, body: Vec<BodyItem>) -> Vec<Block> {
        let mut blocks    = Vec::new();
        let mut paragraph: Vec<String> = Vec::new();

        for item in body {
            match item {
                BodyItem::Line(line) if line.trim().is_empty() => {
                    flush(&mut paragraph, &mut blocks);
                }
                BodyItem::Line(line) => paragraph.push(line),
                BodyItem::Code(code) => {
                    flush(&mut paragraph, &mut blocks);
                    blocks.push(Block::Code(code));
                }
            }
        }

        flush(&mut paragraph, &mut blocks);
        blocks
    }
}

impl Default for BlockSplitter {
    fn default() -> Self {
        Self::new()
    }
}

fn bullet_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    BULLETS
        .iter()
        .find_map(|b| trimmed.strip_prefix(*b))
        .map(str::trim)
}

fn flush(paragraph: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if paragraph.is_empty() {
        return;
    }
    let lines = std::mem::take(paragraph);

    if let Some(items) = as_list(&lines) {
        blocks.push(Block::List { items });
        return;
    }

    let text = lines
        .iter()
        .map(|l| l.trim())
        .collect::<Vec<_>>()
        .join("\n");
    blocks.push(Block::Prose { text });
}

/// Returns the list items if every line is a bullet or an indented continuation
fn as_list(lines: &[String]) -> Option<Vec<String>> {
    let mut items: Vec<String> = Vec::new();

    for line in lines {
        if let Some(text) = bullet_text(line) {
            items.push(text.to_string());
        } else if line.starts_with(' ') || line.starts_with('\t') {
            // continuation; a paragraph cannot start with one
            let last = items.last_mut()?;
            last.push(' ');
            last.push_str(line.trim());
        } else {
            return None;
        }
    }

    Some(items)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::CodeBlock;

    fn lines(text: &str) -> Vec<BodyItem> {
        text.split('\n').map(|l| BodyItem::Line(l.to_string())).collect()
    }

    #[test]
    fn test_blank_lines_separate_paragraphs() {
        let blocks = BlockSplitter::new().split(lines("one\ntwo\n\n\nthree"));
        assert_eq!(
            blocks,
            vec![
                Block::Prose { text: "one\ntwo".into() },
                Block::Prose { text: "three".into() },
            ]
        );
    }

    #[test]
    fn test_bullets_become_list() {
        let blocks = BlockSplitter::new().split(lines("- first\n* second\n  continued\n+ third"));
        assert_eq!(
            blocks,
            vec![Block::List {
                items: vec![
                    "first".into(),
                    "second continued".into(),
                    "third".into(),
                ],
            }]
        );
    }

    #[test]
    fn test_mixed_paragraph_stays_prose() {
        let blocks = BlockSplitter::new().split(lines("Notes:\n- a\n- b"));
        assert!(matches!(blocks.as_slice(), [Block::Prose { .. }]));
    }

    #[test]
    fn test_code_breaks_paragraph() {
        let code = CodeBlock {
            info:   Some("sql".into()),
            text:   "SELECT 1;".into(),
            line:   2,
            closed: true,
        };
        let body = vec![
            BodyItem::Line("before".into()),
            BodyItem::Code(code.clone()),
            BodyItem::Line("after".into()),
        ];

        let blocks = BlockSplitter::new().split(body);
        assert_eq!(
            blocks,
            vec![
                Block::Prose { text: "before".into() },
                Block::Code(code),
                Block::Prose { text: "after".into() },
            ]
        );
    }

    #[test]
    fn test_blank_only_body_is_empty() {
        assert!(BlockSplitter::new().split(lines("\n   \n")).is_empty());
    }
}
