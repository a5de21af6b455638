// ============================================================
// Layer 4 — Artifact Loader
// ============================================================
// Reads the cheat sheet from a file or from stdin.
//
// The contract is all-or-nothing:
//   - a missing file is LoadError::NotFound
//   - anything that stops us reading every byte as UTF-8 text
//     (permissions, a directory, a failing stream, bad bytes)
//     is LoadError::ReadError
//   - otherwise the exact bytes come back as an Artifact
//
// A missing file never turns into an empty document.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use crate::domain::artifact::Artifact;
use crate::domain::error::LoadError;
use crate::domain::traits::ArtifactSource;

/// The input name that selects stdin instead of a file
pub const STDIN_MARKER: &str = "-";

/// Loads the artifact from a path on disk.
/// Holds only the path, so one loader can be shared across threads.
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ArtifactSource for FileLoader {
    fn load(&self) -> Result<Artifact, LoadError> {
        let name = self.path.display().to_string();

        let file = fs::File::open(&self.path)
            .map_err(|e| LoadError::from_io(name.clone(), e))?;

        let artifact = read_artifact(name, file)?;
        tracing::debug!("Loaded '{}' ({} bytes)", artifact.source, artifact.byte_len());
        Ok(artifact)
    }
}

/// Loads the artifact from the process's standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinLoader;

impl ArtifactSource for StdinLoader {
    fn load(&self) -> Result<Artifact, LoadError> {
        let stdin = io::stdin();
        let artifact = read_artifact("<stdin>", stdin.lock())?;
        tracing::debug!("Loaded stdin ({} bytes)", artifact.byte_len());
        Ok(artifact)
    }
}

/// Pick a source for a CLI input argument: `-` is stdin, anything else a path.
pub fn source_for(input: &str) -> Box<dyn ArtifactSource> {
    if input == STDIN_MARKER {
        Box::new(StdinLoader)
    } else {
        Box::new(FileLoader::new(input))
    }
}

/// Consume `reader` to the end and decode it as UTF-8.
/// Every failure here is a ReadError, whatever its io::ErrorKind.
pub fn read_artifact(source: impl Into<String>, mut reader: impl Read) -> Result<Artifact, LoadError> {
    let source = source.into();

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|cause| LoadError::ReadError { path: source.clone(), cause })?;

    let text = String::from_utf8(bytes).map_err(|e| LoadError::ReadError {
        path:  source.clone(),
        cause: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    Ok(Artifact::new(source, text))
}
