//! # Mesh Ingest
//!
//! Loads triangle meshes from files into [`voxel_core::Mesh`].
//!
//! Formats are modelled as [`MeshLoader`] capabilities; a [`LoaderRegistry`]
//! maps lowercase file extensions to loaders and is built once at start-up.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_ingest::LoaderRegistry;
//!
//! let registry = LoaderRegistry::with_defaults();
//! let mesh = registry.load("model.stl")?;
//! println!("loaded {} triangles", mesh.triangle_count());
//! # Ok::<(), mesh_ingest::IngestError>(())
//! ```

pub mod error;
pub mod loader;
pub mod registry;
pub mod stl;

pub use error::{IngestError, IngestResult};
pub use loader::MeshLoader;
pub use registry::LoaderRegistry;
pub use stl::StlLoader;
