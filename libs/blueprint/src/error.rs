//! # Blueprint Errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading, validating or saving a blueprint.
#[derive(Debug, Error)]
pub enum BlueprintError {
    /// Reading or writing the blueprint file failed.
    #[error("Blueprint I/O failed for {}: {source}", path.display())]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The blueprint file is not valid JSON for a blueprint.
    #[error("Blueprint serialization failed for {}: {source}", path.display())]
    Serialization {
        /// File being read or written
        path: PathBuf,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// A template blueprint holds something other than core blocks.
    #[error("Invalid template blueprint: {message}")]
    InvalidTemplate {
        /// What was wrong with the template
        message: String,
    },
}

impl BlueprintError {
    /// Creates an invalid template error.
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            message: message.into(),
        }
    }
}

/// Result type alias for blueprint operations.
pub type BlueprintResult<T> = Result<T, BlueprintError>;
