//! # Voxel Set
//!
//! Unordered set of unique integer lattice points, and the inclusive integer
//! bounding box derived from it.

use std::collections::hash_set;
use std::collections::HashSet;

use glam::IVec3;
use serde::{Deserialize, Serialize};

/// A point in the integer lattice.
///
/// Equality and hashing are purely structural.
pub type Voxel = IVec3;

/// A set of unique voxels.
///
/// Membership tests and insertions are O(1) on average; the morphology
/// operations rely on that, testing every voxel against every offset of a
/// structuring element.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use voxel_core::VoxelSet;
///
/// let mut set = VoxelSet::new();
/// assert!(set.insert(IVec3::new(1, 2, 3)));
/// assert!(!set.insert(IVec3::new(1, 2, 3)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoxelSet {
    pub(crate) voxels: HashSet<Voxel>,
}

impl VoxelSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Inserts a voxel, returning false if it was already present.
    #[inline]
    pub fn insert(&mut self, voxel: Voxel) -> bool {
        self.voxels.insert(voxel)
    }

    /// Returns true if the voxel is present.
    #[inline]
    pub fn contains(&self, voxel: Voxel) -> bool {
        self.voxels.contains(&voxel)
    }

    /// Iterates over the voxels in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Voxel> {
        self.voxels.iter()
    }

    /// Adds every voxel of `other` to this set.
    pub fn union_with(&mut self, other: &VoxelSet) {
        self.voxels.extend(other.voxels.iter().copied());
    }

    /// Returns true if every voxel of `self` is also in `other`.
    pub fn is_subset(&self, other: &VoxelSet) -> bool {
        self.voxels.is_subset(&other.voxels)
    }

    /// Returns the voxels sorted by (x, y, z), for deterministic output.
    pub fn to_sorted_vec(&self) -> Vec<Voxel> {
        let mut voxels: Vec<Voxel> = self.voxels.iter().copied().collect();
        voxels.sort_unstable_by_key(|v| (v.x, v.y, v.z));
        voxels
    }
}

impl From<HashSet<Voxel>> for VoxelSet {
    fn from(voxels: HashSet<Voxel>) -> Self {
        Self { voxels }
    }
}

impl FromIterator<Voxel> for VoxelSet {
    fn from_iter<I: IntoIterator<Item = Voxel>>(iter: I) -> Self {
        Self {
            voxels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Voxel> for VoxelSet {
    fn extend<I: IntoIterator<Item = Voxel>>(&mut self, iter: I) {
        self.voxels.extend(iter);
    }
}

impl IntoIterator for VoxelSet {
    type Item = Voxel;
    type IntoIter = hash_set::IntoIter<Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.into_iter()
    }
}

impl<'a> IntoIterator for &'a VoxelSet {
    type Item = &'a Voxel;
    type IntoIter = hash_set::Iter<'a, Voxel>;

    fn into_iter(self) -> Self::IntoIter {
        self.voxels.iter()
    }
}

/// Inclusive integer bounding box.
///
/// `min <= max` component-wise whenever the set it was computed from is
/// non-empty. The default box has both corners at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner (inclusive)
    pub min: IVec3,
    /// Maximum corner (inclusive)
    pub max: IVec3,
}

impl BoundingBox {
    /// Creates a box from its inclusive corners.
    pub const fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Number of lattice cells spanned on each axis: `max - min + 1`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::IVec3;
    /// use voxel_core::BoundingBox;
    ///
    /// let bounds = BoundingBox::new(IVec3::new(-1, 0, 2), IVec3::new(1, 0, 5));
    /// assert_eq!(bounds.size(), IVec3::new(3, 1, 4));
    /// ```
    #[inline]
    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Returns true if `voxel` lies inside the box.
    #[inline]
    pub fn contains(&self, voxel: Voxel) -> bool {
        voxel.cmpge(self.min).all() && voxel.cmple(self.max).all()
    }
}
