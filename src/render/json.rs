use anyhow::{Context, Result};

use crate::domain::document::Document;
use crate::domain::traits::Renderer;

/// Pretty JSON of the parsed structure. The raw text is not included.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut json = serde_json::to_string_pretty(doc)
            .with_context(|| format!("Cannot serialise '{}' to JSON", doc.source))?;
        json.push('\n');
        Ok(json)
    }
}
