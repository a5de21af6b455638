// ============================================================
// Layer 5 — Plain Text Renderer
// ============================================================
// Terminal-friendly output:
//
//   SQL Cheat Sheet
//   ===============
//
//   1. Querying Data
//   ----------------
//
//   Read rows with SELECT.
//
//     * IN (...) matches any value in a list
//
//       SELECT id, name
//       FROM users;
//
// Headings are underlined (`=` for level 1, `-` below), inline
// backticks are dropped, and code is indented four spaces.

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::section::Block;
use crate::domain::traits::Renderer;
use crate::render::inline::strip_code_marks;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut parts: Vec<String> = Vec::new();

        parts.extend(doc.preamble.iter().map(render_block));

        for section in &doc.sections {
            let rule = if section.level == 1 { '=' } else { '-' };
            let width = section.title.chars().count().max(1);
            parts.push(format!(
                "{}\n{}",
                section.title,
                rule.to_string().repeat(width)
            ));
            parts.extend(section.blocks.iter().map(render_block));
        }

        if parts.is_empty() {
            return Ok(String::new());
        }

        let mut out = parts.join("\n\n");
        out.push('\n');
        Ok(out)
    }
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Prose { text } => strip_code_marks(text),
        Block::List { items } => items
            .iter()
            .map(|item| format!("  * {}", strip_code_marks(item)))
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Code(code) => code
            .text
            .split('\n')
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("    {line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}
