//! # Normalization Tests
//!
//! Tests for centering and scaling meshes.

use super::*;
use crate::mesh::Triangle;
use crate::progress::NoProgress;
use approx::assert_relative_eq;

fn offset_box_mesh() -> Mesh {
    Mesh::from_triangles(vec![
        Triangle::new(
            DVec3::new(10.0, 20.0, 30.0),
            DVec3::new(14.0, 20.0, 30.0),
            DVec3::new(10.0, 22.0, 30.0),
        ),
        Triangle::new(
            DVec3::new(14.0, 22.0, 31.0),
            DVec3::new(10.0, 20.0, 31.0),
            DVec3::new(12.0, 21.0, 30.5),
        ),
    ])
}

#[test]
fn test_center_moves_box_center_to_origin() {
    let centered = center_on_origin(&offset_box_mesh(), &NoProgress);
    let center = bounding_center(&centered).unwrap();
    assert_relative_eq!(center.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(center.y, 0.0, epsilon = 1e-9);
    assert_relative_eq!(center.z, 0.0, epsilon = 1e-9);
}

#[test]
fn test_center_preserves_extent() {
    let mesh = offset_box_mesh();
    let (min, max) = mesh.bounding_box().unwrap();
    let (cmin, cmax) = center_on_origin(&mesh, &NoProgress).bounding_box().unwrap();
    assert_relative_eq!((max - min).x, (cmax - cmin).x, epsilon = 1e-9);
    assert_relative_eq!((max - min).y, (cmax - cmin).y, epsilon = 1e-9);
    assert_relative_eq!((max - min).z, (cmax - cmin).z, epsilon = 1e-9);
}

#[test]
fn test_scale_largest_extent_matches_target() {
    let centered = center_on_origin(&offset_box_mesh(), &NoProgress);
    for target in [1.0, 7.5, 100.0, 500.0] {
        let scaled = scale_to_max_size(&centered, target, &NoProgress);
        let (min, max) = scaled.bounding_box().unwrap();
        assert_relative_eq!((max - min).max_element(), target, epsilon = 1e-9);
    }
}

#[test]
fn test_scale_is_uniform() {
    let centered = center_on_origin(&offset_box_mesh(), &NoProgress);
    let (min, max) = centered.bounding_box().unwrap();
    let before = max - min;

    let scaled = scale_to_max_size(&centered, 40.0, &NoProgress);
    let (smin, smax) = scaled.bounding_box().unwrap();
    let after = smax - smin;

    // Largest extent is x = 4, so every axis grows by 10x
    assert_relative_eq!(after.x / before.x, 10.0, epsilon = 1e-9);
    assert_relative_eq!(after.y / before.y, 10.0, epsilon = 1e-9);
    assert_relative_eq!(after.z / before.z, 10.0, epsilon = 1e-9);
}

#[test]
fn test_scale_skipped_near_unity() {
    let mesh = Mesh::from_triangles(vec![Triangle::new(
        DVec3::new(-0.3, 0.1, 0.0),
        DVec3::new(9.7, 0.2, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
    )]);
    // Extent 10.0 against 10.005 -> factor 1.0005, under the skip tolerance
    let scaled = scale_to_max_size(&mesh, 10.005, &NoProgress);
    assert_eq!(scaled, mesh);
}

#[test]
fn test_empty_mesh_unchanged() {
    let mesh = Mesh::new();
    assert!(normalize(&mesh, 10.0, &NoProgress).is_empty());
    assert!(bounding_center(&mesh).is_none());
}

#[test]
fn test_point_mesh_is_not_scaled() {
    let p = DVec3::new(3.0, 3.0, 3.0);
    let mesh = Mesh::from_triangles(vec![Triangle::new(p, p, p)]);
    let normalized = normalize(&mesh, 50.0, &NoProgress);
    for v in normalized.vertices() {
        assert!(v.is_finite());
        assert_eq!(v, DVec3::ZERO);
    }
}

#[test]
fn test_normalize_reports_progress() {
    use std::cell::RefCell;

    let messages = RefCell::new(Vec::new());
    let sink = crate::progress::FnProgress(|m: &str| messages.borrow_mut().push(m.to_string()));
    normalize(&offset_box_mesh(), 20.0, &sink);

    let messages = messages.into_inner();
    assert!(messages.iter().any(|m| m.starts_with("Centering mesh")));
    assert!(messages.iter().any(|m| m.starts_with("Scaling mesh")));
}
