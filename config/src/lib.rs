//! # Config Crate
//!
//! Centralized configuration constants for the mesh-to-blueprint pipeline.
//! All magic numbers and tunable parameters are defined here so that the
//! voxelizer, the loaders and the blueprint assembler agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_MAX_SIZE, DEFAULT_RESOLUTION, SCALE_SKIP_TOLERANCE};
//!
//! // Resolution is expressed in voxels per mesh unit
//! let voxels_across = DEFAULT_MAX_SIZE as f64 * DEFAULT_RESOLUTION;
//! assert_eq!(voxels_across, 500.0);
//!
//! // Scale factors this close to 1.0 are not applied
//! let scale: f64 = 1.0005;
//! assert!((scale - 1.0).abs() < SCALE_SKIP_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Usable from every crate in the workspace
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
