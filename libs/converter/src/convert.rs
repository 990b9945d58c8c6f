//! # Conversion
//!
//! A [`ConversionRequest`] describes one run: where the mesh comes from, the
//! blueprint to start from, where to save, and the voxelization parameters.

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use blueprint::{
    assemble, AssemblyReport, BlockType, BlueprintContainer, BlueprintKind, GridBlueprint,
};
use config::constants::DEFAULT_DISPLAY_NAME;
use mesh_ingest::LoaderRegistry;
use voxel_core::{Axis, ConversionParameters, ConversionStats, Mesh, ProgressSink, Voxelizer};

use crate::error::{ConvertError, ConvertResult};

/// Where the triangles come from.
#[derive(Debug, Clone, PartialEq)]
pub enum MeshSource {
    /// Load from a mesh file
    File(PathBuf),
    /// Use triangles that were already loaded (and possibly transformed).
    /// Must not be empty; there is no file to fall back to.
    Mesh(Mesh),
}

/// Everything one conversion run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Input triangles
    pub source: MeshSource,
    /// Output blueprint path
    pub output: PathBuf,
    /// Template blueprint; a core-only blueprint of `kind` when absent
    pub template: Option<PathBuf>,
    /// Name stored in the blueprint
    pub display_name: String,
    /// Blueprint kind used when there is no template
    pub kind: BlueprintKind,
    /// Hull block; the default for the blueprint kind when absent
    pub hull: Option<BlockType>,
    /// Rotations in degrees, applied in order before voxelization
    pub rotations: Vec<(Axis, f64)>,
    /// Voxelization parameters
    pub params: ConversionParameters,
}

impl ConversionRequest {
    /// Creates a request with default parameters and no template.
    pub fn new(source: MeshSource, output: impl Into<PathBuf>) -> Self {
        Self {
            source,
            output: output.into(),
            template: None,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            kind: BlueprintKind::default(),
            hull: None,
            rotations: Vec::new(),
            params: ConversionParameters::default(),
        }
    }

    fn validate(&self) -> ConvertResult<()> {
        if self.output.as_os_str().is_empty() {
            return Err(ConvertError::MissingPath { what: "Output" });
        }
        match &self.source {
            MeshSource::File(path) if path.as_os_str().is_empty() => {
                return Err(ConvertError::MissingPath { what: "Input mesh" });
            }
            MeshSource::Mesh(mesh) if mesh.is_empty() => {
                return Err(ConvertError::EmptyMeshSource);
            }
            _ => {}
        }
        if matches!(&self.template, Some(path) if path.as_os_str().is_empty()) {
            return Err(ConvertError::MissingPath { what: "Template" });
        }
        self.params.validate()?;
        Ok(())
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionOutcome {
    /// Where the blueprint was written
    pub output: PathBuf,
    /// Voxelization statistics
    pub stats: ConversionStats,
    /// Placement summary
    pub assembly: AssemblyReport,
}

/// Runs a whole conversion on the calling thread.
///
/// # Errors
///
/// Configuration, ingestion, template and save failures, plus cancellation
/// when `cancel` is set between pipeline stages. Nothing is written unless
/// every step succeeds.
pub fn convert(
    request: &ConversionRequest,
    registry: &LoaderRegistry,
    progress: &dyn ProgressSink,
    cancel: Option<Arc<AtomicBool>>,
) -> ConvertResult<ConversionOutcome> {
    progress.report("Starting mesh to blueprint conversion...");
    request.validate()?;

    progress.report("Loading template blueprint...");
    let mut blueprint = match &request.template {
        Some(path) => GridBlueprint::load_template(path)?,
        None => GridBlueprint::template(request.kind),
    };
    let kind = blueprint.kind();

    let loaded;
    let mesh = match &request.source {
        MeshSource::Mesh(mesh) => {
            progress.report("Using pre-transformed mesh data...");
            mesh
        }
        MeshSource::File(path) => {
            progress.report("Loading mesh file...");
            loaded = registry.load(path)?;
            &loaded
        }
    };

    let rotated;
    let mesh = if request.rotations.is_empty() {
        mesh
    } else {
        rotated = request
            .rotations
            .iter()
            .fold(mesh.clone(), |m, &(axis, degrees)| m.rotated(axis, degrees));
        &rotated
    };

    progress.report("Starting voxelization process...");
    let mut voxelizer = Voxelizer::new(request.params.clone()).with_progress(progress);
    if let Some(cancel) = cancel {
        voxelizer = voxelizer.with_cancellation(cancel);
    }
    let result = voxelizer.run(mesh)?;

    progress.report("Creating blueprint from voxels...");
    blueprint.set_display_name(&request.display_name);
    let hull = request
        .hull
        .clone()
        .unwrap_or_else(|| BlockType::default_hull_for(kind));
    let assembly = assemble(&mut blueprint, &result.voxels, &result.bounds, &hull, progress);

    progress.report("Saving output blueprint...");
    blueprint.save(&request.output)?;

    progress.report(&format!(
        "Conversion complete! Generated {} blocks.",
        result.stats.final_voxels
    ));

    Ok(ConversionOutcome {
        output: request.output.clone(),
        stats: result.stats,
        assembly,
    })
}

/// File name for a blueprint called `display_name`.
///
/// Characters that are not allowed in file names become `_`; a blank name
/// falls back to the default display name.
///
/// # Example
///
/// ```rust
/// use converter::output_file_name;
///
/// assert_eq!(output_file_name("My Ship"), "My Ship.json");
/// assert_eq!(output_file_name("a/b:c?"), "a_b_c_.json");
/// assert_eq!(output_file_name("  "), "ConvertedMesh.json");
/// ```
pub fn output_file_name(display_name: &str) -> String {
    let trimmed = display_name.trim();
    let name = if trimmed.is_empty() {
        DEFAULT_DISPLAY_NAME
    } else {
        trimmed
    };

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{sanitized}.json")
}
