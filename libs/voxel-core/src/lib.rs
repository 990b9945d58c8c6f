//! # Voxel Core
//!
//! Converts triangulated surface meshes into a discrete, axis-aligned voxel
//! set ready to be placed as blocks in a grid-backed blueprint.
//!
//! ## Architecture
//!
//! ```text
//! Mesh ─→ normalize ─→ rasterize / mirror ─→ erode ─→ dilate ─→ hollow ─→ translate_to_origin
//! ```
//!
//! Every stage is a pure function over an owned input producing a fresh
//! output; [`Voxelizer`] threads them together, reports progress and checks
//! for cancellation between stages.
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use voxel_core::{ConversionParameters, Mesh, Triangle, Voxelizer};
//!
//! let mesh = Mesh::from_triangles(vec![Triangle::new(
//!     DVec3::new(0.0, 0.0, 0.0),
//!     DVec3::new(10.0, 0.0, 0.0),
//!     DVec3::new(0.0, 10.0, 0.0),
//! )]);
//!
//! let params = ConversionParameters {
//!     max_size: 10,
//!     hollow_enabled: false,
//!     ..Default::default()
//! };
//!
//! let result = Voxelizer::new(params).run(&mesh)?;
//! assert!(result.stats.final_voxels > 0);
//! assert_eq!(result.bounds.min, glam::IVec3::ZERO);
//! # Ok::<(), voxel_core::VoxelError>(())
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod pipeline;
pub mod progress;
pub mod voxel;

pub use error::{VoxelError, VoxelResult};
pub use mesh::{Axis, Mesh, Triangle};
pub use ops::bounds::{compute_bounds, translate_to_origin};
pub use ops::mirror::{mirror_voxelize, reflect_voxels};
pub use ops::morphology::{dilate, erode, hollow, StructuringElement};
pub use ops::normalize::{bounding_center, center_on_origin, normalize, scale_to_max_size};
pub use ops::rasterize::rasterize;
pub use params::{ConversionParameters, MirrorPlane};
pub use pipeline::{ConversionStats, Stage, VoxelizationResult, Voxelizer};
pub use progress::{FnProgress, LogProgress, NoProgress, ProgressSink};
pub use voxel::{BoundingBox, Voxel, VoxelSet};
