// ============================================================
// Layer 5 — HTML Renderer
// ============================================================
// Maps the document structure onto a handful of HTML elements:
//
//   Section heading → <hN id="anchor">   (unique per document)
//   Prose           → <p>, with `code` spans as <code>
//   List            → <ul><li>
//   Code block      → <pre><code class="language-sql">
//
// All text, including SQL, is escaped and otherwise left as is.
// With `standalone` the fragment is wrapped in a full page whose
// <title> is the document title (or the source name).

use std::fmt::Write;

use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::section::{Block, CodeBlock};
use crate::domain::traits::Renderer;
use crate::render::inline::{spans, Span};

pub struct HtmlRenderer {
    standalone: bool,
}

impl HtmlRenderer {
    /// `standalone` wraps the fragment in a full page
    pub fn new(standalone: bool) -> Self {
        Self { standalone }
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut body = String::new();

        for block in &doc.preamble {
            write_block(&mut body, block)?;
        }

        for (section, anchor) in doc.sections.iter().zip(doc.anchors()) {
            writeln!(
                body,
                "<h{lvl} id=\"{id}\">{title}</h{lvl}>",
                lvl = section.level,
                id = anchor,
                title = inline_html(&section.title),
            )?;
            for block in &section.blocks {
                write_block(&mut body, block)?;
            }
        }

        if !self.standalone {
            return Ok(body);
        }

        let title = doc.title.as_deref().unwrap_or(&doc.source);
        let mut page = String::with_capacity(body.len() + 256);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        writeln!(page, "<title>{}</title>", escape(title))?;
        page.push_str("</head>\n<body>\n");
        page.push_str(&body);
        page.push_str("</body>\n</html>\n");
        Ok(page)
    }
}

fn write_block(out: &mut String, block: &Block) -> std::fmt::Result {
    match block {
        Block::Prose { text } => writeln!(out, "<p>{}</p>", inline_html(text)),
        Block::List { items } => {
            out.push_str("<ul>\n");
            for item in items {
                writeln!(out, "<li>{}</li>", inline_html(item))?;
            }
            out.push_str("</ul>\n");
            Ok(())
        }
        Block::Code(code) => write_code(out, code),
    }
}

fn write_code(out: &mut String, code: &CodeBlock) -> std::fmt::Result {
    match code.language() {
        Some(lang) => write!(out, "<pre><code class=\"language-{}\">", escape(lang))?,
        None => out.push_str("<pre><code>"),
    }
    out.push_str(&escape(&code.text));
    if !code.text.is_empty() {
        out.push('\n');
    }
    out.push_str("</code></pre>\n");
    Ok(())
}

/// Escape text and turn `code` spans into <code> elements
fn inline_html(text: &str) -> String {
    spans(text)
        .into_iter()
        .map(|span| match span {
            Span::Text(t) => escape(t),
            Span::Code(c) => format!("<code>{}</code>", escape(c)),
        })
        .collect()
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::DocumentParser;
    use crate::domain::artifact::Artifact;

    fn render(text: &str, standalone: bool) -> String {
        let doc = DocumentParser::new().parse(Artifact::new("t.md", text));
        HtmlRenderer::new(standalone).render(&doc).unwrap()
    }

    #[test]
    fn test_sql_is_escaped_not_interpreted() {
        let out = render("## 2. Filtering\n```sql\nSELECT * FROM t WHERE a < 1 AND b <> 'x';\n```", false);
        assert_eq!(
            out,
            "<h2 id=\"2-filtering\">2. Filtering</h2>\n\
             <pre><code class=\"language-sql\">SELECT * FROM t WHERE a &lt; 1 AND b &lt;&gt; &#39;x&#39;;\n</code></pre>\n"
        );
    }

    #[test]
    fn test_prose_lists_and_inline_code() {
        let out = render("Use `<>` here.\n\n- `IN` & `LIKE`", false);
        assert_eq!(
            out,
            "<p>Use <code>&lt;&gt;</code> here.</p>\n\
             <ul>\n<li><code>IN</code> &amp; <code>LIKE</code></li>\n</ul>\n"
        );
    }

    #[test]
    fn test_standalone_page_uses_document_title() {
        let out = render("# SQL <Cheat> Sheet\n", true);
        assert!(out.starts_with("<!DOCTYPE html>\n"));
        assert!(out.contains("<title>SQL &lt;Cheat&gt; Sheet</title>"));
        assert!(out.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_standalone_page_falls_back_to_source() {
        let out = render("no headings", true);
        assert!(out.contains("<title>t.md</title>"));
    }

    #[test]
    fn test_repeated_headings_get_distinct_ids() {
        let out = render("# T\n## Example\nx\n## Example\ny\n", false);
        assert_eq!(
            out,
            "<h1 id=\"t\">T</h1>\n\
             <h2 id=\"example\">Example</h2>\n<p>x</p>\n\
             <h2 id=\"example-1\">Example</h2>\n<p>y</p>\n"
        );
    }

    #[test]
    fn test_code_block_keeps_unicode_and_trailing_spaces() {
        let out = render("```sql\nSELECT 'a\u{00A0}b';  \n```", false);
        assert_eq!(out, "<pre><code class=\"language-sql\">SELECT &#39;a\u{00A0}b&#39;;  \n</code></pre>\n");
    }

    #[test]
    fn test_code_without_info_has_no_class() {
        let out = render("```\nx\n```", false);
        assert_eq!(out, "<pre><code>x\n</code></pre>\n");
    }
}
