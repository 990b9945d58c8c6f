//! # Blueprint
//!
//! The voxel-placement boundary: a [`BlueprintContainer`] abstraction over a
//! grid-backed blueprint, an in-memory [`GridBlueprint`] implementation and
//! the [`assemble`] step that writes a voxel set plus the core anchor block
//! into a container.
//!
//! ## Usage
//!
//! ```rust
//! use glam::IVec3;
//! use blueprint::{assemble, BlockType, BlueprintKind, GridBlueprint};
//! use voxel_core::{translate_to_origin, NoProgress, VoxelSet};
//!
//! let voxels: VoxelSet = (0..3).map(|x| IVec3::new(x, 0, 0)).collect();
//! let (voxels, bounds) = translate_to_origin(&voxels);
//!
//! let mut grid = GridBlueprint::new(BlueprintKind::CapitalVessel);
//! let hull = BlockType::default_hull_for(BlueprintKind::CapitalVessel);
//! let report = assemble(&mut grid, &voxels, &bounds, &hull, &NoProgress);
//!
//! assert_eq!(report.grid_size, IVec3::new(5, 3, 3));
//! assert_eq!(grid.non_core_block_count(), 2);
//! ```

pub mod assemble;
pub mod block;
pub mod container;
pub mod error;
pub mod grid;

pub use assemble::{assemble, AssemblyReport};
pub use block::{BlockType, BlueprintKind};
pub use container::BlueprintContainer;
pub use error::{BlueprintError, BlueprintResult};
pub use grid::GridBlueprint;
