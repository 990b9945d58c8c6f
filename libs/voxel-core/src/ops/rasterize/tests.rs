//! # Rasterization Tests
//!
//! Tests for vertex rounding, interior fill and degenerate triangles.

use super::*;
use crate::progress::NoProgress;

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> Triangle {
    Triangle::new(DVec3::from(a), DVec3::from(b), DVec3::from(c))
}

#[test]
fn test_rounding_ties_away_from_zero() {
    assert_eq!(to_lattice(DVec3::new(2.5, -2.5, 0.4999), 1.0), IVec3::new(3, -3, 0));
    assert_eq!(to_lattice(DVec3::new(0.25, 0.75, -0.25), 2.0), IVec3::new(1, 2, -1));
}

#[test]
fn test_unit_triangle_contains_vertices() {
    let voxels = rasterize_triangle(&tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]), 1.0);
    assert!(voxels.contains(IVec3::new(0, 0, 0)));
    assert!(voxels.contains(IVec3::new(1, 0, 0)));
    assert!(voxels.contains(IVec3::new(0, 1, 0)));
    // (1, 1, 0) has u + v = 2
    assert!(!voxels.contains(IVec3::new(1, 1, 0)));
    assert_eq!(voxels.len(), 3);
}

#[test]
fn test_right_triangle_fill_is_exact() {
    let voxels = rasterize_triangle(&tri([0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 4.0, 0.0]), 1.0);
    // Lattice points with x, y >= 0 and x + y <= 4 -> 15 points
    assert_eq!(voxels.len(), 15);
    for v in &voxels {
        assert_eq!(v.z, 0);
        assert!(v.x >= 0 && v.y >= 0 && v.x + v.y <= 4);
    }
}

#[test]
fn test_resolution_scales_lattice() {
    let triangle = tri([0.0, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]);
    let coarse = rasterize_triangle(&triangle, 1.0);
    let fine = rasterize_triangle(&triangle, 2.0);
    assert!(fine.contains(IVec3::new(4, 0, 0)));
    assert!(fine.len() > coarse.len());
}

#[test]
fn test_degenerate_triangle_contributes_only_vertices() {
    // Collinear
    let line = rasterize_triangle(&tri([0.0, 0.0, 0.0], [2.0, 2.0, 2.0], [5.0, 5.0, 5.0]), 1.0);
    assert_eq!(line.len(), 3);

    // All three vertices round to the same point
    let point = rasterize_triangle(&tri([0.1, 0.1, 0.1], [0.2, 0.0, 0.0], [0.0, 0.3, 0.2]), 1.0);
    assert_eq!(point.len(), 1);
    assert!(point.contains(IVec3::ZERO));
}

#[test]
fn test_tilted_triangle_includes_vertices() {
    let triangle = tri([-3.2, 1.1, 0.0], [2.6, -4.0, 3.3], [0.4, 5.5, -2.7]);
    let voxels = rasterize_triangle(&triangle, 1.0);
    for vertex in triangle.vertices() {
        assert!(voxels.contains(to_lattice(vertex, 1.0)));
    }
}

#[test]
fn test_barycentric_matches_float_reference() {
    let a = IVec3::new(0, 0, 0);
    let b = IVec3::new(6, 1, 2);
    let c = IVec3::new(1, 5, -1);
    let exact = Barycentric::new(a, b, c).unwrap();

    let af = a.as_dvec3();
    let v0 = c.as_dvec3() - af;
    let v1 = b.as_dvec3() - af;
    let (d00, d01, d11) = (v0.dot(v0), v0.dot(v1), v1.dot(v1));
    let inv = 1.0 / (d00 * d11 - d01 * d01);

    for x in -1..=7 {
        for y in -1..=6 {
            for z in -2..=3 {
                let p = IVec3::new(x, y, z);
                let v2 = p.as_dvec3() - af;
                let (d02, d12) = (v0.dot(v2), v1.dot(v2));
                let u = (d11 * d02 - d01 * d12) * inv;
                let v = (d00 * d12 - d01 * d02) * inv;
                // Skip points sitting on an edge, where float rounding may disagree
                if u.abs() < 1e-9 || v.abs() < 1e-9 || (u + v - 1.0).abs() < 1e-9 {
                    continue;
                }
                assert_eq!(exact.contains(p), u >= 0.0 && v >= 0.0 && u + v <= 1.0, "{p}");
            }
        }
    }
}

#[test]
fn test_mesh_triangles_share_one_set() {
    let mesh = Mesh::from_triangles(vec![
        tri([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 3.0, 0.0]),
        tri([3.0, 0.0, 0.0], [0.0, 3.0, 0.0], [3.0, 3.0, 0.0]),
    ]);
    let voxels = rasterize(&mesh, 1.0, &NoProgress);
    // Two halves of a 4x4 square share the diagonal
    assert_eq!(voxels.len(), 16);
}

#[test]
fn test_many_triangles_report_progress() {
    use std::cell::Cell;

    let triangle = tri([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
    let mesh = Mesh::from_triangles(vec![triangle; PROGRESS_TRIANGLE_INTERVAL * 2 + 5]);

    let reports = Cell::new(0);
    let sink = crate::progress::FnProgress(|_: &str| reports.set(reports.get() + 1));
    let voxels = rasterize(&mesh, 1.0, &sink);

    assert_eq!(voxels.len(), 3);
    assert_eq!(reports.get(), 2);
}

#[test]
fn test_empty_mesh_yields_empty_set() {
    assert!(rasterize(&Mesh::new(), 1.0, &NoProgress).is_empty());
}

#[test]
fn test_lattice_extremes_do_not_overflow() {
    // Vertices saturate at the i32 limits; the edge products still fit
    let triangle = tri([-250.0, 0.0, 0.0], [250.0, 0.0, 0.0], [0.0, 0.0, 0.0]);
    let voxels = rasterize_triangle(&triangle, 1e7);
    assert_eq!(voxels.len(), 3);
    assert!(voxels.contains(IVec3::new(i32::MIN, 0, 0)));
    assert!(voxels.contains(IVec3::new(i32::MAX, 0, 0)));

    let half = 1 << 30;
    let wide = Barycentric::new(
        IVec3::new(-half, -half, 0),
        IVec3::new(half, -half, 0),
        IVec3::new(-half, half, 0),
    )
    .unwrap();
    assert!(wide.contains(IVec3::ZERO));
    assert!(wide.contains(IVec3::new(-half, -half, 0)));
    assert!(!wide.contains(IVec3::new(i32::MAX, i32::MAX, 0)));
}
