//! # Triangle Rasterization
//!
//! Converts triangles into integer lattice points.
//!
//! ## Algorithm Overview
//!
//! For each triangle:
//! 1. Scale the vertices by the resolution and round to the nearest lattice
//!    point (ties away from zero)
//! 2. Insert the three rounded vertices
//! 3. Scan the integer bounding box of the rounded vertices and keep every
//!    point whose projection onto the triangle's plane has barycentric
//!    weights `u >= 0`, `v >= 0`, `u + v <= 1`
//!
//! The barycentric test runs in exact integer arithmetic on the rounded
//! vertices. Zero-area triangles have a zero denominator and contribute only
//! their vertices.
//!
//! Triangles are processed in chunks; each chunk is rasterized in parallel
//! into private sets which are merged afterwards, with a progress report
//! between chunks.

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use config::constants::PROGRESS_TRIANGLE_INTERVAL;
use glam::{DVec3, I64Vec3, IVec3};
use rayon::prelude::*;

use crate::mesh::{Mesh, Triangle};
use crate::progress::ProgressSink;
use crate::voxel::{Voxel, VoxelSet};

/// Scales a point by `resolution` and rounds it to the nearest lattice point.
///
/// # Example
///
/// ```rust
/// use glam::{DVec3, IVec3};
/// use voxel_core::ops::rasterize::to_lattice;
///
/// assert_eq!(to_lattice(DVec3::new(0.5, -0.5, 1.49), 1.0), IVec3::new(1, -1, 1));
/// assert_eq!(to_lattice(DVec3::new(1.2, 0.0, 0.0), 2.0), IVec3::new(2, 0, 0));
/// ```
#[inline]
pub fn to_lattice(point: DVec3, resolution: f64) -> Voxel {
    (point * resolution).round().as_ivec3()
}

/// Rasterizes every triangle of the mesh into one voxel set.
///
/// `resolution` must be positive and the scaled mesh must stay within
/// `MAX_LATTICE_EXTENT`; `ConversionParameters::validate` checks both.
///
/// # Example
///
/// ```rust
/// use glam::{DVec3, IVec3};
/// use voxel_core::{rasterize, Mesh, NoProgress, Triangle};
///
/// let mesh = Mesh::from_triangles(vec![Triangle::new(
///     DVec3::ZERO,
///     DVec3::new(4.0, 0.0, 0.0),
///     DVec3::new(0.0, 4.0, 0.0),
/// )]);
/// let voxels = rasterize(&mesh, 1.0, &NoProgress);
/// assert!(voxels.contains(IVec3::new(1, 1, 0)));
/// assert!(!voxels.contains(IVec3::new(3, 3, 0)));
/// ```
pub fn rasterize(mesh: &Mesh, resolution: f64, progress: &dyn ProgressSink) -> VoxelSet {
    let total = mesh.triangle_count();
    let mut voxels = VoxelSet::new();
    let mut processed = 0;

    for chunk in mesh.triangles().chunks(PROGRESS_TRIANGLE_INTERVAL) {
        let partial = chunk
            .par_iter()
            .fold(HashSet::new, |mut acc, triangle| {
                rasterize_triangle_into(triangle, resolution, &mut acc);
                acc
            })
            .reduce(HashSet::new, merge_sets);
        voxels.extend(partial);

        processed += chunk.len();
        if processed % PROGRESS_TRIANGLE_INTERVAL == 0 {
            progress.report(&format!("Processed {processed}/{total} triangles"));
        }
    }

    log::debug!(
        "rasterized {total} triangles at resolution {resolution} into {} voxels",
        voxels.len()
    );
    voxels
}

/// Rasterizes a single triangle.
pub fn rasterize_triangle(triangle: &Triangle, resolution: f64) -> VoxelSet {
    let mut points = HashSet::new();
    rasterize_triangle_into(triangle, resolution, &mut points);
    VoxelSet::from(points)
}

fn rasterize_triangle_into(triangle: &Triangle, resolution: f64, out: &mut HashSet<Voxel>) {
    let a = to_lattice(triangle.v0, resolution);
    let b = to_lattice(triangle.v1, resolution);
    let c = to_lattice(triangle.v2, resolution);

    out.insert(a);
    out.insert(b);
    out.insert(c);

    let Some(test) = Barycentric::new(a, b, c) else {
        return;
    };

    let min = a.min(b).min(c);
    let max = a.max(b).max(c);

    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                let point = IVec3::new(x, y, z);
                if test.contains(point) {
                    out.insert(point);
                }
            }
        }
    }
}

fn merge_sets(mut a: HashSet<Voxel>, mut b: HashSet<Voxel>) -> HashSet<Voxel> {
    if a.len() < b.len() {
        std::mem::swap(&mut a, &mut b);
    }
    a.extend(b);
    a
}

/// Dot product widened before multiplying, so edges spanning the full `i32`
/// range cannot overflow.
#[inline]
fn wide_dot(a: I64Vec3, b: I64Vec3) -> i128 {
    i128::from(a.x) * i128::from(b.x)
        + i128::from(a.y) * i128::from(b.y)
        + i128::from(a.z) * i128::from(b.z)
}

/// Barycentric containment test against a lattice triangle.
///
/// With `e0 = c - a`, `e1 = b - a` and `e2 = p - a`, the weights are
/// `u = (d11 d02 - d01 d12) / D` and `v = (d00 d12 - d01 d02) / D` where
/// `D = d00 d11 - d01²` is the Gram determinant of the two edges. `D >= 0`
/// always, and `D == 0` exactly when the triangle is degenerate.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Barycentric {
    origin: I64Vec3,
    e0: I64Vec3,
    e1: I64Vec3,
    d00: i128,
    d01: i128,
    d11: i128,
    denominator: i128,
}

impl Barycentric {
    /// Returns `None` for collinear or coincident vertices.
    pub(crate) fn new(a: Voxel, b: Voxel, c: Voxel) -> Option<Self> {
        let origin = a.as_i64vec3();
        let e0 = c.as_i64vec3() - origin;
        let e1 = b.as_i64vec3() - origin;

        let d00 = wide_dot(e0, e0);
        let d01 = wide_dot(e0, e1);
        let d11 = wide_dot(e1, e1);
        let denominator = d00 * d11 - d01 * d01;

        if denominator == 0 {
            return None;
        }

        Some(Self {
            origin,
            e0,
            e1,
            d00,
            d01,
            d11,
            denominator,
        })
    }

    /// True when both weights are non-negative and sum to at most one.
    pub(crate) fn contains(&self, point: Voxel) -> bool {
        let e2 = point.as_i64vec3() - self.origin;
        let d02 = wide_dot(self.e0, e2);
        let d12 = wide_dot(self.e1, e2);

        let u = self.d11 * d02 - self.d01 * d12;
        let v = self.d00 * d12 - self.d01 * d02;

        u >= 0 && v >= 0 && u + v <= self.denominator
    }
}
