use anyhow::Result;

use crate::domain::document::Document;
use crate::domain::traits::Renderer;

/// Emits the artifact exactly as it was read.
pub struct RawRenderer;

impl Renderer for RawRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        Ok(doc.raw.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parser::DocumentParser;
    use crate::domain::artifact::Artifact;

    #[test]
    fn test_output_bytes_equal_input_bytes() {
        let input = "\u{FEFF}# SQL\r\n\n```sql\n# inside\nSELECT 1;   \n```\r\n\n\n\ntail";
        let doc   = DocumentParser::new().parse(Artifact::new("t.md", input));
        let out   = RawRenderer.render(&doc).unwrap();
        assert_eq!(out.as_bytes(), input.as_bytes());
    }
}
