//! # Mesh Normalization
//!
//! Centers a mesh on its bounding-box centroid, then scales it uniformly so
//! the largest bounding-box extent equals the target size.
//!
//! ## Edge Cases
//!
//! - An empty mesh is returned unchanged
//! - Scale factors within `SCALE_SKIP_TOLERANCE` of 1.0 are not applied
//! - A mesh whose vertices all coincide has no extent and is not scaled

#[cfg(test)]
mod tests;

use config::constants::{approx_zero, is_unit_scale};
use glam::DVec3;

use crate::mesh::Mesh;
use crate::progress::ProgressSink;

/// Translates the mesh so its bounding-box center is at the origin.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use voxel_core::{center_on_origin, Mesh, NoProgress, Triangle};
///
/// let mesh = Mesh::from_triangles(vec![Triangle::new(
///     DVec3::new(2.0, 2.0, 2.0),
///     DVec3::new(4.0, 2.0, 2.0),
///     DVec3::new(2.0, 6.0, 2.0),
/// )]);
/// let centered = center_on_origin(&mesh, &NoProgress);
/// let (min, max) = centered.bounding_box().unwrap();
/// assert_eq!((min + max) / 2.0, DVec3::ZERO);
/// ```
pub fn center_on_origin(mesh: &Mesh, progress: &dyn ProgressSink) -> Mesh {
    let Some(center) = bounding_center(mesh) else {
        return mesh.clone();
    };

    progress.report(&format!(
        "Centering mesh around origin (center offset: {:.2}, {:.2}, {:.2})",
        center.x, center.y, center.z
    ));
    log::debug!("centering {} triangles on {center}", mesh.triangle_count());

    mesh.translated(-center)
}

/// Scales the mesh uniformly so its largest extent equals `target_size`.
///
/// `target_size` must be positive; callers validate it upstream.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use voxel_core::{scale_to_max_size, Mesh, NoProgress, Triangle};
///
/// let mesh = Mesh::from_triangles(vec![Triangle::new(
///     DVec3::ZERO,
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// )]);
/// let scaled = scale_to_max_size(&mesh, 10.0, &NoProgress);
/// let (min, max) = scaled.bounding_box().unwrap();
/// assert!(((max - min).max_element() - 10.0).abs() < 1e-9);
/// ```
pub fn scale_to_max_size(mesh: &Mesh, target_size: f64, progress: &dyn ProgressSink) -> Mesh {
    let Some((min, max)) = mesh.bounding_box() else {
        return mesh.clone();
    };

    let largest_extent = (max - min).max_element();
    if approx_zero(largest_extent) {
        log::warn!("mesh has no spatial extent, skipping scaling");
        return mesh.clone();
    }

    let scale = target_size / largest_extent;
    progress.report(&format!(
        "Scaling mesh by factor {scale:.3} to target size {target_size} (from max dimension {largest_extent:.1})"
    ));

    if is_unit_scale(scale) {
        log::debug!("scale factor {scale} is close to 1.0, leaving vertices untouched");
        return mesh.clone();
    }

    mesh.scaled(scale)
}

/// Centers the mesh on the origin, then scales it to `target_size`.
pub fn normalize(mesh: &Mesh, target_size: f64, progress: &dyn ProgressSink) -> Mesh {
    let centered = center_on_origin(mesh, progress);
    scale_to_max_size(&centered, target_size, progress)
}

/// Returns the bounding-box center of the mesh, if it has any vertices.
pub fn bounding_center(mesh: &Mesh) -> Option<DVec3> {
    mesh.bounding_box().map(|(min, max)| (min + max) / 2.0)
}
