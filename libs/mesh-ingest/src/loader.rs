//! # Loader Capability
//!
//! One implementation per file format.

use std::path::Path;

use voxel_core::Mesh;

use crate::error::IngestResult;

/// A mesh file format that can be loaded from disk.
///
/// Loaders are shared through the registry, so they must be thread-safe.
pub trait MeshLoader: Send + Sync {
    /// Lowercase extensions handled by this loader, with the leading dot
    /// (e.g. `".stl"`).
    fn supported_extensions(&self) -> &[&'static str];

    /// Reads every triangle of the file at `path`, in file order.
    ///
    /// # Errors
    ///
    /// `FileNotFound` when the path does not exist, `Corrupt` when the
    /// content cannot be parsed, `Io` for other read failures.
    fn load_triangles(&self, path: &Path) -> IngestResult<Mesh>;
}
