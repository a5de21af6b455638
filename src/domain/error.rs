//! Loader errors.
//!
//! Only two things can go wrong when reading the artifact: it is not
//! there, or it cannot be read to the end as text.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("artifact not found: '{path}'")]
    NotFound { path: String },

    #[error("cannot read '{path}': {cause}")]
    ReadError {
        path: String,
        #[source]
        cause: io::Error,
    },
}

impl LoadError {
    /// Classify an I/O failure for `path`.
    /// `ErrorKind::NotFound` maps to `NotFound`, everything else is a read error.
    pub fn from_io(path: impl Into<String>, cause: io::Error) -> Self {
        let path = path.into();
        match cause.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            _ => LoadError::ReadError { path, cause },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kind_is_classified() {
        let err = LoadError::from_io("a.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "artifact not found: 'a.md'");
    }

    #[test]
    fn test_other_kinds_are_read_errors() {
        let err = LoadError::from_io(
            "a.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, LoadError::ReadError { .. }));
    }
}
