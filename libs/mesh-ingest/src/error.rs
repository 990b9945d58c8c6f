//! # Ingestion Errors
//!
//! Every variant carries the offending path, except format mismatches which
//! are decided from the extension alone.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a mesh file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input file does not exist.
    #[error("Mesh file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// No loader is registered for the file extension.
    #[error("Unsupported file format '{extension}' (supported: {})", supported.join(", "))]
    UnsupportedFormat {
        /// Extension of the input, lowercase, empty if there was none
        extension: String,
        /// Extensions that do have a loader
        supported: Vec<String>,
    },

    /// The file exists but its content is not a valid mesh.
    #[error("Corrupt mesh file {}: {message}", path.display())]
    Corrupt {
        /// Path of the corrupt file
        path: PathBuf,
        /// What was wrong with it
        message: String,
    },

    /// Reading the file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl IngestError {
    /// Creates a corrupt-content error for `path`.
    pub fn corrupt(path: &Path, message: impl Into<String>) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Maps an I/O error, turning `NotFound` into [`IngestError::FileNotFound`].
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Path of the offending file, if the error concerns one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileNotFound { path } | Self::Corrupt { path, .. } | Self::Io { path, .. } => {
                Some(path)
            }
            Self::UnsupportedFormat { .. } => None,
        }
    }
}

/// Result type alias for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;
