// ============================================================
// Layer 5 — Renderers
// ============================================================
// Turn a parsed Document into something a person reads:
//
//   raw   → the artifact bytes, untouched
//   text  → plain text for a terminal
//   html  → escaped HTML, fragment or full page
//   json  → the parsed structure, for other tools
//
// Every renderer is a pure function of the Document, so the
// same Document always renders to the same output. Code block
// contents are escaped where the format needs it and otherwise
// passed through as opaque text.

use serde::{Deserialize, Serialize};

use crate::domain::traits::Renderer;

pub mod inline;
pub mod raw;
pub mod text;
pub mod html;
pub mod json;

pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use raw::RawRenderer;
pub use text::TextRenderer;

/// Output format selected on the command line or in a config file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Raw,
    Text,
    Html,
    Json,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Raw  => "raw",
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        }
    }
}

/// Build the renderer for a format.
/// `standalone` only affects HTML: a full page instead of a fragment.
pub fn renderer_for(format: Format, standalone: bool) -> Box<dyn Renderer> {
    match format {
        Format::Raw  => Box::new(RawRenderer),
        Format::Text => Box::new(TextRenderer),
        Format::Html => Box::new(HtmlRenderer::new(standalone)),
        Format::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::DocumentParser;
    use crate::domain::artifact::Artifact;

    const CHEATSHEET: &str = include_str!("../../docs/sql-cheatsheet.md");

    #[test]
    fn test_every_format_is_idempotent() {
        let parser = DocumentParser::new();

        for format in [Format::Raw, Format::Text, Format::Html, Format::Json] {
            let first  = parser.parse(Artifact::new("cheatsheet.md", CHEATSHEET));
            let second = parser.parse(Artifact::new("cheatsheet.md", CHEATSHEET));
            let r = renderer_for(format, true);

            assert_eq!(
                r.render(&first).unwrap(),
                r.render(&second).unwrap(),
                "format {} is not deterministic",
                format.name()
            );
        }
    }

    #[test]
    fn test_format_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Format::Html).unwrap(), "\"html\"");
        let parsed: Format = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, Format::Text);
    }
}
