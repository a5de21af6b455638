// ============================================================
// Layer 6 — Output Sink
// ============================================================
// Writes rendered text to stdout or to a file.
//
// Nothing is appended: no trailing newline, no banner. For the
// raw format the bytes written are the bytes that were read.
//
// Reference: Rust Book §12 (Writing to Files)

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    File(PathBuf),
}

impl OutputSink {
    /// `None` and `-` both mean stdout
    pub fn from_arg(output: Option<&str>) -> Self {
        match output {
            None | Some("-") => OutputSink::Stdout,
            Some(path) => OutputSink::File(PathBuf::from(path)),
        }
    }

    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            OutputSink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(text.as_bytes())
                    .context("Cannot write to stdout")?;
                out.flush().context("Cannot flush stdout")?;
            }
            OutputSink::File(path) => {
                // Like `mkdir -p` for the parent directory
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Cannot create directory '{}'", parent.display())
                    })?;
                }
                fs::write(path, text)
                    .with_context(|| format!("Cannot write output to '{}'", path.display()))?;
                tracing::debug!("Wrote {} bytes to '{}'", text.len(), path.display());
            }
        }
        Ok(())
    }
}
