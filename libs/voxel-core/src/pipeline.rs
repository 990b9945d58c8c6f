//! # Voxelization Pipeline
//!
//! Threads the stages together in their fixed order:
//!
//! ```text
//! normalize ─→ rasterize (or mirror) ─→ erode ─→ dilate ─→ hollow ─→ translate_to_origin
//! ```
//!
//! Each stage fully completes before the next begins and owns its output.
//! Cancellation is checked only between stages.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use glam::IVec3;

use crate::error::{VoxelError, VoxelResult};
use crate::mesh::Mesh;
use crate::ops::bounds::translate_to_origin;
use crate::ops::mirror::mirror_voxelize;
use crate::ops::morphology::{dilate, erode, hollow};
use crate::ops::normalize::normalize;
use crate::ops::rasterize::rasterize;
use crate::params::ConversionParameters;
use crate::progress::{NoProgress, ProgressSink};
use crate::voxel::{BoundingBox, VoxelSet};

/// A pipeline stage, used to report where a run was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Centering and scaling the mesh
    Normalization,
    /// Rasterizing triangles, mirrored or not
    Rasterization,
    /// Erosion
    Erosion,
    /// Dilation
    Dilation,
    /// Hollowing
    Hollowing,
    /// Bounds computation and translation
    Bounds,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Normalization => "normalization",
            Stage::Rasterization => "rasterization",
            Stage::Erosion => "erosion",
            Stage::Dilation => "dilation",
            Stage::Hollowing => "hollowing",
            Stage::Bounds => "bounds",
        };
        f.write_str(name)
    }
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionStats {
    /// Triangles in the input mesh
    pub input_triangles: usize,
    /// Voxels produced by rasterization, before morphology
    pub generated_voxels: usize,
    /// Voxels in the final set
    pub final_voxels: usize,
    /// Wall-clock time spent in the pipeline
    pub elapsed: Duration,
    /// Size of the final bounding box
    pub final_size: IVec3,
}

/// Output of [`Voxelizer::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelizationResult {
    /// Final voxels, translated so the minimum corner is the origin
    pub voxels: VoxelSet,
    /// Bounds of `voxels`
    pub bounds: BoundingBox,
    /// Run statistics
    pub stats: ConversionStats,
}

/// Runs the voxelization pipeline over a mesh.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::AtomicBool;
/// use std::sync::Arc;
/// use glam::DVec3;
/// use voxel_core::{ConversionParameters, LogProgress, Mesh, Triangle, Voxelizer};
///
/// let mesh = Mesh::from_triangles(vec![Triangle::new(
///     DVec3::ZERO,
///     DVec3::new(6.0, 0.0, 0.0),
///     DVec3::new(0.0, 6.0, 0.0),
/// )]);
/// let params = ConversionParameters { max_size: 6, hollow_enabled: false, ..Default::default() };
/// let cancel = Arc::new(AtomicBool::new(false));
///
/// let result = Voxelizer::new(params)
///     .with_progress(&LogProgress)
///     .with_cancellation(cancel)
///     .run(&mesh)?;
/// assert_eq!(result.bounds.size().z, 1);
/// # Ok::<(), voxel_core::VoxelError>(())
/// ```
pub struct Voxelizer<'a> {
    params: ConversionParameters,
    progress: &'a dyn ProgressSink,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> Voxelizer<'a> {
    /// Creates a voxelizer that reports nowhere and cannot be cancelled.
    pub fn new(params: ConversionParameters) -> Self {
        Self {
            params,
            progress: &NoProgress,
            cancel: None,
        }
    }

    /// Sends progress messages to `progress`.
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// Aborts the run at the next stage boundary once `cancel` is set.
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Parameters this voxelizer runs with.
    pub fn params(&self) -> &ConversionParameters {
        &self.params
    }

    /// Runs every stage over `mesh`.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` when the parameters fail validation
    /// - `EmptyMesh` when the mesh has no triangles
    /// - `Cancelled` when the cancellation flag is observed between stages
    pub fn run(&self, mesh: &Mesh) -> VoxelResult<VoxelizationResult> {
        self.params.validate()?;
        if mesh.is_empty() {
            return Err(VoxelError::EmptyMesh);
        }

        let started = Instant::now();
        let params = &self.params;
        let progress = self.progress;

        progress.report(&format!("Processing {} triangles...", mesh.triangle_count()));

        self.checkpoint(Stage::Normalization)?;
        let normalized = normalize(mesh, f64::from(params.max_size), progress);

        self.checkpoint(Stage::Rasterization)?;
        let mut voxels = match params.effective_mirror_plane() {
            Some(plane) => mirror_voxelize(&normalized, plane, params.resolution, progress),
            None => rasterize(&normalized, params.resolution, progress),
        };
        drop(normalized);
        let generated_voxels = voxels.len();
        progress.report(&format!("Generated {generated_voxels} voxels from triangulation"));

        self.checkpoint(Stage::Erosion)?;
        if params.erosion_radius > 0 {
            progress.report(&format!(
                "Applying erosion (radius: {})...",
                params.erosion_radius
            ));
            voxels = erode(&voxels, params.erosion_radius);
        }

        self.checkpoint(Stage::Dilation)?;
        if params.dilation_radius > 0 {
            progress.report(&format!(
                "Applying dilation (radius: {})...",
                params.dilation_radius
            ));
            voxels = dilate(&voxels, params.dilation_radius);
        }

        self.checkpoint(Stage::Hollowing)?;
        if params.hollow_enabled {
            progress.report(&format!(
                "Creating hollow hull (radius: {})...",
                params.hollow_radius
            ));
            voxels = hollow(&voxels, params.hollow_radius);
        }

        self.checkpoint(Stage::Bounds)?;
        let (voxels, bounds) = translate_to_origin(&voxels);

        let elapsed = started.elapsed();
        progress.report(&format!(
            "Voxelization complete: {} blocks in {:.2}s",
            voxels.len(),
            elapsed.as_secs_f64()
        ));

        let stats = ConversionStats {
            input_triangles: mesh.triangle_count(),
            generated_voxels,
            final_voxels: voxels.len(),
            elapsed,
            final_size: bounds.size(),
        };
        log::info!(
            "voxelized {} triangles into {} voxels ({} generated), size {}",
            stats.input_triangles,
            stats.final_voxels,
            stats.generated_voxels,
            stats.final_size
        );

        Ok(VoxelizationResult {
            voxels,
            bounds,
            stats,
        })
    }

    fn checkpoint(&self, stage: Stage) -> VoxelResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => {
                log::debug!("cancellation observed before {stage}");
                Err(VoxelError::Cancelled { stage })
            }
            _ => Ok(()),
        }
    }
}
