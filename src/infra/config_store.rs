// ============================================================
// Layer 6 — Config Store
// ============================================================
// Saves and loads a RenderConfig as pretty JSON so a rendering
// setup can be reused:
//
//   sql-cheatsheet render --format html --standalone \
//       --output site/index.html --save-config render.json
//   sql-cheatsheet render --config render.json
//
// Example file:
//   {
//     "input": "docs/sql-cheatsheet.md",
//     "output": "site/index.html",
//     "format": "html",
//     "standalone": true
//   }
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::render_use_case::RenderConfig;

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write `cfg` as pretty JSON, creating parent directories first
    pub fn save(&self, cfg: &RenderConfig) -> Result<()> {
        let json = serde_json::to_string_pretty(cfg)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved render config to '{}'", self.path.display());
        Ok(())
    }

    /// Read settings saved by `save`. Missing fields take their defaults;
    /// a missing or malformed file is an error.
    pub fn load(&self) -> Result<RenderConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("Invalid render config in '{}'", self.path.display()))
    }
}
