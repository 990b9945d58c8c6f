//! # Voxelization Errors
//!
//! Error types for the voxelization pipeline.
//!
//! ## Error Policy
//!
//! - Invalid parameters are rejected before any processing begins
//! - Degenerate geometry never raises an error; it only contributes less fill
//! - An error out of any stage aborts the remaining pipeline

use thiserror::Error;

use crate::pipeline::Stage;

/// Errors that can occur during voxelization.
///
/// ## Example
///
/// ```rust
/// use voxel_core::{ConversionParameters, VoxelError};
///
/// let params = ConversionParameters { resolution: 0.0, ..Default::default() };
/// match params.validate() {
///     Err(VoxelError::InvalidParameter { name, .. }) => assert_eq!(name, "resolution"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VoxelError {
    /// A conversion parameter is out of range.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// The input mesh has no triangles.
    #[error("Mesh contains no triangles")]
    EmptyMesh,

    /// The run was cancelled before the given stage started.
    #[error("Conversion cancelled before {stage}")]
    Cancelled {
        /// Stage that was about to run
        stage: Stage,
    },
}

impl VoxelError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias for voxelization operations.
pub type VoxelResult<T> = Result<T, VoxelError>;
