//! # Mirror Voxelization
//!
//! Voxelizes one half of a bilaterally symmetric mesh and reflects the result
//! across a coordinate plane, instead of rasterizing the whole mesh.
//!
//! ## Algorithm Overview
//!
//! 1. Keep every triangle with at least one vertex on the non-negative side
//!    of the plane. Straddling triangles are kept whole, so the half set may
//!    reach a sliver past the plane.
//! 2. Rasterize the kept triangles
//! 3. Negate the coordinate perpendicular to the plane for every voxel not
//!    lying on the plane
//! 4. Union the half set with its reflection


use crate::mesh::Mesh;
use crate::ops::rasterize::rasterize;
use crate::params::MirrorPlane;
use crate::progress::ProgressSink;
use crate::voxel::{Voxel, VoxelSet};

/// Returns the triangles with at least one vertex on the non-negative side
/// of `plane`. `MirrorPlane::None` keeps everything.
pub fn keep_half(mesh: &Mesh, plane: MirrorPlane) -> Mesh {
    let Some(axis) = plane.normal_axis() else {
        return mesh.clone();
    };

    mesh.triangles()
        .iter()
        .filter(|triangle| triangle.vertices().iter().any(|v| v[axis] >= 0.0))
        .copied()
        .collect()
}

/// Reflects a single voxel across `plane`.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use voxel_core::ops::mirror::reflect;
/// use voxel_core::MirrorPlane;
///
/// assert_eq!(reflect(IVec3::new(3, 1, 2), MirrorPlane::Yz), IVec3::new(-3, 1, 2));
/// assert_eq!(reflect(IVec3::new(3, 1, 2), MirrorPlane::Xy), IVec3::new(3, 1, -2));
/// ```
#[inline]
pub fn reflect(voxel: Voxel, plane: MirrorPlane) -> Voxel {
    let mut reflected = voxel;
    if let Some(axis) = plane.normal_axis() {
        reflected[axis] = -reflected[axis];
    }
    reflected
}

/// Reflects every voxel of `half` across `plane`.
///
/// Voxels on the plane map to themselves and are left out of the result.
pub fn reflect_voxels(half: &VoxelSet, plane: MirrorPlane) -> VoxelSet {
    let Some(axis) = plane.normal_axis() else {
        return VoxelSet::new();
    };

    half.iter()
        .filter(|voxel| voxel[axis] != 0)
        .map(|&voxel| reflect(voxel, plane))
        .collect()
}

/// Voxelizes the non-negative half of `mesh` and mirrors it across `plane`.
///
/// With `MirrorPlane::None` this is plain rasterization.
pub fn mirror_voxelize(
    mesh: &Mesh,
    plane: MirrorPlane,
    resolution: f64,
    progress: &dyn ProgressSink,
) -> VoxelSet {
    if plane == MirrorPlane::None {
        return rasterize(mesh, resolution, progress);
    }

    progress.report(&format!("Starting mirror voxelization using {plane} plane..."));

    let half_mesh = keep_half(mesh, plane);
    progress.report(&format!(
        "Clipped to {} triangles on positive side of {plane} plane",
        half_mesh.triangle_count()
    ));

    let mut voxels = rasterize(&half_mesh, resolution, progress);
    progress.report(&format!("Generated {} voxels from half-mesh", voxels.len()));

    let mirrored = reflect_voxels(&voxels, plane);
    progress.report(&format!("Generated {} mirrored voxels", mirrored.len()));

    voxels.union_with(&mirrored);
    progress.report(&format!("Total voxels after mirroring: {}", voxels.len()));

    log::debug!(
        "mirror voxelization across {plane}: {} of {} triangles kept, {} voxels",
        half_mesh.triangle_count(),
        mesh.triangle_count(),
        voxels.len()
    );
    voxels
}
