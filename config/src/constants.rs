//! # Configuration Constants
//!
//! Centralized constants for the mesh-to-blueprint pipeline. Conversion
//! defaults, numeric tolerances, safety limits and block identifiers are
//! defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Conversion Defaults**: Default voxelization parameters
//! - **Limits**: Maximum values for safety bounds
//! - **Blueprint**: Padding and block-type identifiers

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if a floating-point extent is effectively zero.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance under which a normalization scale factor is treated as 1.0.
///
/// When the factor needed to fit a mesh into the target size is within this
/// distance of 1.0 the mesh is returned unscaled, so no floating-point noise
/// is introduced into vertices that already have the right extent.
///
/// # Example
///
/// ```rust
/// use config::constants::SCALE_SKIP_TOLERANCE;
///
/// let scale: f64 = 100.0 / 99.95;
/// assert!((scale - 1.0).abs() < SCALE_SKIP_TOLERANCE);
/// ```
pub const SCALE_SKIP_TOLERANCE: f64 = 0.001;

// =============================================================================
// CONVERSION DEFAULTS
// =============================================================================

/// Default voxelization resolution (voxels per mesh unit).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_RESOLUTION;
///
/// let user_resolution: Option<f64> = None;
/// assert_eq!(user_resolution.unwrap_or(DEFAULT_RESOLUTION), 1.0);
/// ```
pub const DEFAULT_RESOLUTION: f64 = 1.0;

/// Default size of the largest mesh dimension after normalization.
pub const DEFAULT_MAX_SIZE: u32 = 500;

/// Default radius for hull hollowing.
pub const DEFAULT_HOLLOW_RADIUS: u32 = 1;

/// Whether hollowing is enabled by default.
pub const DEFAULT_CREATE_HOLLOW: bool = true;

/// Display name used when the caller does not provide one.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DISPLAY_NAME;
///
/// let requested = "   ";
/// let name = if requested.trim().is_empty() { DEFAULT_DISPLAY_NAME } else { requested };
/// assert_eq!(name, "ConvertedMesh");
/// ```
pub const DEFAULT_DISPLAY_NAME: &str = "ConvertedMesh";

/// Number of triangles rasterized between two progress reports.
pub const PROGRESS_TRIANGLE_INTERVAL: usize = 1000;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Largest accepted erosion, dilation or hollowing radius.
///
/// The structuring element grows with the cube of the radius and every
/// morphology pass tests each voxel against all of its offsets.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_MORPHOLOGY_RADIUS;
///
/// let requested = 4;
/// assert!(requested <= MAX_MORPHOLOGY_RADIUS);
/// ```
pub const MAX_MORPHOLOGY_RADIUS: u32 = 32;

/// Largest accepted lattice extent, `max_size * resolution`, in cells.
///
/// Lattice coordinates are `i32`; this keeps every rasterized point and the
/// padded blueprint grid far from the integer limits.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LATTICE_EXTENT;
///
/// let (max_size, resolution) = (500.0, 4.0);
/// assert!(max_size * resolution <= MAX_LATTICE_EXTENT);
/// ```
pub const MAX_LATTICE_EXTENT: f64 = 65_536.0;

/// Maximum number of triangles accepted from a single mesh file.
///
/// A binary STL announcing more faces than this is treated as corrupt.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// BLUEPRINT CONSTANTS
// =============================================================================

/// Empty cells kept around the voxel hull on every side of the grid.
///
/// # Example
///
/// ```rust
/// use config::constants::BLUEPRINT_PADDING;
///
/// let hull_width = 10;
/// assert_eq!(hull_width + 2 * BLUEPRINT_PADDING, 12);
/// ```
pub const BLUEPRINT_PADDING: i32 = 1;

/// Block identifier of the mandatory core block.
///
/// Every blueprint type uses the same core block.
pub const CORE_BLOCK_ID: u32 = 558;

/// Block-map name of the core block.
pub const CORE_BLOCK_NAME: &str = "Core";

/// Block identifier of the small steel hull block.
pub const STEEL_BLOCK_SMALL_ID: u32 = 381;

/// Block-map name of the small steel hull block.
pub const STEEL_BLOCK_SMALL_NAME: &str = "HullFullSmall";

/// Block identifier of the large steel hull block.
pub const STEEL_BLOCK_LARGE_ID: u32 = 403;

/// Block-map name of the large steel hull block.
pub const STEEL_BLOCK_LARGE_NAME: &str = "HullFullLarge";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Checks if a scale factor is close enough to 1.0 to be skipped.
///
/// # Example
///
/// ```rust
/// use config::constants::is_unit_scale;
///
/// assert!(is_unit_scale(1.0009));
/// assert!(!is_unit_scale(1.01));
/// ```
#[inline]
pub fn is_unit_scale(scale: f64) -> bool {
    (scale - 1.0).abs() < SCALE_SKIP_TOLERANCE
}
