//! # Triangle Soup Mesh
//!
//! Triangles own their three vertices; there is no shared-vertex indexing.
//! Transformations never mutate a mesh in place, they return a new one.

use glam::{DMat3, DVec3};

/// A triangle with three ordered vertices.
///
/// All geometry uses f64 internally; loaders widen f32 file data on read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v0: DVec3,
    /// Second vertex
    pub v1: DVec3,
    /// Third vertex
    pub v2: DVec3,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    #[inline]
    pub const fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        Self { v0, v1, v2 }
    }

    /// Returns the vertices in order.
    #[inline]
    pub fn vertices(&self) -> [DVec3; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// Returns a new triangle with `f` applied to every vertex.
    #[inline]
    pub fn map(&self, f: impl Fn(DVec3) -> DVec3) -> Self {
        Self::new(f(self.v0), f(self.v1), f(self.v2))
    }
}

/// Coordinate axis used for rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The X axis
    X,
    /// The Y axis
    Y,
    /// The Z axis
    Z,
}

impl Axis {
    fn rotation(self, radians: f64) -> DMat3 {
        match self {
            Axis::X => DMat3::from_rotation_x(radians),
            Axis::Y => DMat3::from_rotation_y(radians),
            Axis::Z => DMat3::from_rotation_z(radians),
        }
    }
}

/// An ordered sequence of triangles.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use voxel_core::{Mesh, Triangle};
///
/// let mesh = Mesh::from_triangles(vec![Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y)]);
/// assert_eq!(mesh.triangle_count(), 1);
/// let (min, max) = mesh.bounding_box().unwrap();
/// assert_eq!(min, DVec3::ZERO);
/// assert_eq!(max, DVec3::new(1.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from a list of triangles.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates over every vertex of every triangle.
    pub fn vertices(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices())
    }

    /// Computes the axis-aligned bounding box over all vertices.
    ///
    /// Returns (min, max) corners, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let mut vertices = self.vertices();
        let first = vertices.next()?;
        Some(vertices.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Returns a new mesh with `f` applied to every vertex.
    pub fn map_vertices(&self, f: impl Fn(DVec3) -> DVec3) -> Mesh {
        self.triangles.iter().map(|t| t.map(&f)).collect()
    }

    /// Returns a new mesh with every vertex translated by `offset`.
    pub fn translated(&self, offset: DVec3) -> Mesh {
        self.map_vertices(|v| v + offset)
    }

    /// Returns a new mesh with every vertex multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Mesh {
        self.map_vertices(|v| v * factor)
    }

    /// Returns a new mesh rotated about `axis` through the origin.
    ///
    /// Positive angles rotate counter-clockwise when looking down the axis
    /// towards the origin.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use voxel_core::{Axis, Mesh, Triangle};
    ///
    /// let mesh = Mesh::from_triangles(vec![Triangle::new(DVec3::X, DVec3::X, DVec3::X)]);
    /// let rotated = mesh.rotated(Axis::Z, 90.0);
    /// assert!((rotated.triangles()[0].v0 - DVec3::Y).length() < 1e-12);
    /// ```
    pub fn rotated(&self, axis: Axis, degrees: f64) -> Mesh {
        let rotation = axis.rotation(degrees.to_radians());
        self.map_vertices(|v| rotation * v)
    }
}

impl FromIterator<Triangle> for Mesh {
    fn from_iter<I: IntoIterator<Item = Triangle>>(iter: I) -> Self {
        Self::from_triangles(iter.into_iter().collect())
    }
}

impl From<Vec<Triangle>> for Mesh {
    fn from(triangles: Vec<Triangle>) -> Self {
        Self::from_triangles(triangles)
    }
}

impl IntoIterator for Mesh {
    type Item = Triangle;
    type IntoIter = std::vec::IntoIter<Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.into_iter()
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
