//! # Conversion Errors
//!
//! One error type for a whole conversion run. Any error aborts the run
//! before the output is written.

use blueprint::BlueprintError;
use mesh_ingest::IngestError;
use thiserror::Error;
use voxel_core::VoxelError;

/// Errors that can abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Invalid parameters, empty mesh or cancellation.
    #[error(transparent)]
    Voxel(#[from] VoxelError),

    /// The input mesh could not be loaded.
    #[error("Failed to load mesh: {0}")]
    Ingest(#[from] IngestError),

    /// The template could not be loaded or the output could not be saved.
    #[error(transparent)]
    Blueprint(#[from] BlueprintError),

    /// A required path was left empty.
    #[error("{what} path is required")]
    MissingPath {
        /// Which path is missing
        what: &'static str,
    },

    /// A pre-transformed mesh was supplied without any triangles.
    #[error("Pre-transformed mesh contains no triangles")]
    EmptyMeshSource,

    /// The worker thread panicked.
    #[error("Conversion worker panicked")]
    WorkerPanicked,
}

impl ConvertError {
    /// Returns true if the run was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Voxel(VoxelError::Cancelled { .. }))
    }
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
