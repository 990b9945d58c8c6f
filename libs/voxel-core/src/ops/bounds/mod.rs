//! # Bounds and Translation
//!
//! Computes the inclusive bounding box of a voxel set and moves the set so
//! its minimum corner sits on the origin.


use glam::IVec3;

use crate::voxel::{BoundingBox, VoxelSet};

/// Component-wise min/max over every voxel.
///
/// An empty set yields the default box at the origin.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use voxel_core::{compute_bounds, VoxelSet};
///
/// let set: VoxelSet = [IVec3::new(-2, 4, 1), IVec3::new(3, 0, 1)].into_iter().collect();
/// let bounds = compute_bounds(&set);
/// assert_eq!(bounds.min, IVec3::new(-2, 0, 1));
/// assert_eq!(bounds.max, IVec3::new(3, 4, 1));
/// ```
pub fn compute_bounds(set: &VoxelSet) -> BoundingBox {
    let mut voxels = set.iter();
    let Some(&first) = voxels.next() else {
        return BoundingBox::default();
    };

    let (min, max) = voxels.fold((first, first), |(min, max), &v| (min.min(v), max.max(v)));
    BoundingBox::new(min, max)
}

/// Translates the set so its minimum corner is the origin.
///
/// Returns the translated set and its new bounds (`min` at the origin, `max`
/// at `size - 1`). Translating an already origin-based set is a no-op.
pub fn translate_to_origin(set: &VoxelSet) -> (VoxelSet, BoundingBox) {
    let bounds = compute_bounds(set);
    if bounds.min == IVec3::ZERO {
        return (set.clone(), bounds);
    }

    let offset = bounds.min;
    let translated: VoxelSet = set.iter().map(|&v| v - offset).collect();
    let new_bounds = BoundingBox::new(IVec3::ZERO, bounds.max - offset);

    log::debug!("translated {} voxels by {}", translated.len(), -offset);
    (translated, new_bounds)
}
