//! # Morphology
//!
//! Erosion, dilation and hollowing over a voxel set with a discrete spherical
//! structuring element.
//!
//! ## Algorithm Overview
//!
//! The structuring element of radius `r` is every integer offset with
//! `dx² + dy² + dz² <= r²`. It is generated once per call and tested against
//! every voxel of the input:
//!
//! - **Erosion** keeps a voxel when every offset neighbour is present
//! - **Dilation** adds every offset neighbour of every voxel
//! - **Hollowing** keeps a voxel when at least one offset neighbour is absent
//!
//! Each voxel only reads the input set, so the per-voxel loops run on rayon
//! and collect into a fresh output set.
//!
//! ## Radius Zero
//!
//! Erosion and dilation return the input unchanged. Hollowing is evaluated
//! literally: the only offset is the voxel itself, which is always present,
//! so the result is empty. Pipeline parameters reject that combination.


use std::collections::HashSet;

use glam::IVec3;
use rayon::prelude::*;

use crate::voxel::{Voxel, VoxelSet};

/// Discrete sphere of neighbour offsets.
///
/// # Example
///
/// ```rust
/// use voxel_core::StructuringElement;
///
/// assert_eq!(StructuringElement::new(0).len(), 1);
/// // Centre plus the six face neighbours
/// assert_eq!(StructuringElement::new(1).len(), 7);
/// assert_eq!(StructuringElement::new(2).len(), 33);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    radius: u32,
    offsets: Vec<IVec3>,
}

impl StructuringElement {
    /// Generates the element for `radius`.
    pub fn new(radius: u32) -> Self {
        let r = radius as i32;
        let r_squared = i64::from(r) * i64::from(r);
        let side = (2 * radius as usize) + 1;
        let mut offsets = Vec::with_capacity(side * side * side);

        for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    let offset = IVec3::new(dx, dy, dz);
                    if offset.as_i64vec3().length_squared() <= r_squared {
                        offsets.push(offset);
                    }
                }
            }
        }

        Self { radius, offsets }
    }

    /// Radius the element was generated for.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Neighbour offsets, including the origin.
    pub fn offsets(&self) -> &[IVec3] {
        &self.offsets
    }

    /// Number of offsets.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always false: the origin offset is part of every element.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    fn all_present(&self, set: &HashSet<Voxel>, voxel: Voxel) -> bool {
        self.offsets.iter().all(|&offset| set.contains(&(voxel + offset)))
    }
}

/// Keeps only the voxels whose whole neighbourhood is inside the set.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use voxel_core::{erode, VoxelSet};
///
/// let cube: VoxelSet = (0..3)
///     .flat_map(|x| (0..3).flat_map(move |y| (0..3).map(move |z| IVec3::new(x, y, z))))
///     .collect();
/// let core = erode(&cube, 1);
/// assert_eq!(core.to_sorted_vec(), vec![IVec3::ONE]);
/// ```
pub fn erode(set: &VoxelSet, radius: u32) -> VoxelSet {
    if radius == 0 {
        return set.clone();
    }

    let element = StructuringElement::new(radius);
    let voxels: HashSet<Voxel> = set
        .voxels
        .par_iter()
        .copied()
        .filter(|&voxel| element.all_present(&set.voxels, voxel))
        .collect();

    log::debug!("erosion r={radius}: {} -> {} voxels", set.len(), voxels.len());
    VoxelSet::from(voxels)
}

/// Grows the set by every neighbour within `radius`.
pub fn dilate(set: &VoxelSet, radius: u32) -> VoxelSet {
    if radius == 0 {
        return set.clone();
    }

    let element = StructuringElement::new(radius);
    let voxels: HashSet<Voxel> = set
        .voxels
        .par_iter()
        .flat_map_iter(|&voxel| element.offsets().iter().map(move |&offset| voxel + offset))
        .collect();

    log::debug!("dilation r={radius}: {} -> {} voxels", set.len(), voxels.len());
    VoxelSet::from(voxels)
}

/// Keeps only surface voxels: those with at least one missing neighbour
/// within `radius`.
pub fn hollow(set: &VoxelSet, radius: u32) -> VoxelSet {
    let element = StructuringElement::new(radius);
    let voxels: HashSet<Voxel> = set
        .voxels
        .par_iter()
        .copied()
        .filter(|&voxel| !element.all_present(&set.voxels, voxel))
        .collect();

    log::debug!("hollowing r={radius}: {} -> {} voxels", set.len(), voxels.len());
    VoxelSet::from(voxels)
}
