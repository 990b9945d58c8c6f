//! # Voxelization Operations
//!
//! Pipeline stages, leaves first: normalization, rasterization, mirror
//! voxelization, morphology and bounds/translation.

pub mod bounds;
pub mod mirror;
pub mod morphology;
pub mod normalize;
pub mod rasterize;
