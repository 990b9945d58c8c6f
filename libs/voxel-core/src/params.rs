//! # Conversion Parameters
//!
//! Immutable configuration snapshot consumed by the voxelization pipeline.
//! Built once per conversion run, read-only thereafter.

use std::fmt;

use config::constants::{
    DEFAULT_CREATE_HOLLOW, DEFAULT_HOLLOW_RADIUS, DEFAULT_MAX_SIZE, DEFAULT_RESOLUTION,
    MAX_LATTICE_EXTENT, MAX_MORPHOLOGY_RADIUS,
};
use serde::{Deserialize, Serialize};

use crate::error::{VoxelError, VoxelResult};

/// Coordinate plane through the origin used for mirror voxelization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorPlane {
    /// No mirroring
    #[default]
    None,
    /// The plane Z = 0
    Xy,
    /// The plane Y = 0
    Xz,
    /// The plane X = 0
    Yz,
}

impl MirrorPlane {
    /// Index of the coordinate perpendicular to the plane, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voxel_core::MirrorPlane;
    ///
    /// assert_eq!(MirrorPlane::Yz.normal_axis(), Some(0));
    /// assert_eq!(MirrorPlane::Xy.normal_axis(), Some(2));
    /// assert_eq!(MirrorPlane::None.normal_axis(), None);
    /// ```
    pub fn normal_axis(self) -> Option<usize> {
        match self {
            MirrorPlane::None => None,
            MirrorPlane::Yz => Some(0),
            MirrorPlane::Xz => Some(1),
            MirrorPlane::Xy => Some(2),
        }
    }
}

impl fmt::Display for MirrorPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MirrorPlane::None => "none",
            MirrorPlane::Xy => "XY",
            MirrorPlane::Xz => "XZ",
            MirrorPlane::Yz => "YZ",
        };
        f.write_str(name)
    }
}

/// Parameters for one conversion run.
///
/// # Example
///
/// ```rust
/// use voxel_core::{ConversionParameters, MirrorPlane};
///
/// let params = ConversionParameters {
///     resolution: 2.0,
///     max_size: 64,
///     mirror_plane: MirrorPlane::Yz,
///     mirror_enabled: true,
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.effective_mirror_plane(), Some(MirrorPlane::Yz));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionParameters {
    /// Voxels per mesh unit
    pub resolution: f64,
    /// Size of the largest mesh dimension after normalization
    pub max_size: u32,
    /// Erosion radius (0 disables erosion)
    pub erosion_radius: u32,
    /// Dilation radius (0 disables dilation)
    pub dilation_radius: u32,
    /// Keep only the surface shell of the voxel set
    pub hollow_enabled: bool,
    /// Shell thickness used when hollowing
    pub hollow_radius: u32,
    /// Mirror plane selection
    pub mirror_plane: MirrorPlane,
    /// Voxelize one half and reflect it; effective only with a mirror plane
    pub mirror_enabled: bool,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            max_size: DEFAULT_MAX_SIZE,
            erosion_radius: 0,
            dilation_radius: 0,
            hollow_enabled: DEFAULT_CREATE_HOLLOW,
            hollow_radius: DEFAULT_HOLLOW_RADIUS,
            mirror_plane: MirrorPlane::None,
            mirror_enabled: false,
        }
    }
}

impl ConversionParameters {
    /// Checks every parameter, returning the first configuration error.
    pub fn validate(&self) -> VoxelResult<()> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(VoxelError::invalid_parameter(
                "resolution",
                format!("must be a finite number greater than 0, got {}", self.resolution),
            ));
        }

        if self.max_size == 0 {
            return Err(VoxelError::invalid_parameter(
                "max_size",
                "must be greater than 0",
            ));
        }

        let extent = f64::from(self.max_size) * self.resolution;
        if extent > MAX_LATTICE_EXTENT {
            return Err(VoxelError::invalid_parameter(
                "resolution",
                format!(
                    "max_size * resolution = {extent} exceeds the lattice limit of {MAX_LATTICE_EXTENT}"
                ),
            ));
        }

        for (name, radius) in [
            ("erosion_radius", self.erosion_radius),
            ("dilation_radius", self.dilation_radius),
            ("hollow_radius", self.hollow_radius),
        ] {
            if radius > MAX_MORPHOLOGY_RADIUS {
                return Err(VoxelError::invalid_parameter(
                    name,
                    format!("{radius} exceeds the maximum of {MAX_MORPHOLOGY_RADIUS}"),
                ));
            }
        }

        // Every voxel is its own neighbour at radius 0, so nothing would survive
        if self.hollow_enabled && self.hollow_radius == 0 {
            return Err(VoxelError::invalid_parameter(
                "hollow_radius",
                "must be at least 1 when hollowing is enabled",
            ));
        }

        Ok(())
    }

    /// The mirror plane to use, or `None` when mirroring is off.
    pub fn effective_mirror_plane(&self) -> Option<MirrorPlane> {
        match self.mirror_plane {
            MirrorPlane::None => None,
            plane if self.mirror_enabled => Some(plane),
            _ => None,
        }
    }
}
