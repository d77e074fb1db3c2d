use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while writing fixture files.
///
/// Every variant is fatal: the run stops at the first one and leaves
/// whatever was already written on disk.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The fixture file could not be created (missing directory, permissions).
    #[error("cannot create '{}': {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A write or the final flush failed (disk full, I/O error).
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Shorthand constructors.
impl GenerateError {
    pub fn create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Path of the fixture the failure happened on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } => path,
        }
    }
}
