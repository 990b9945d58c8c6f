//! `mesh2bp`: convert a triangle mesh into a voxel blueprint.
//!
//! ```text
//! mesh2bp hull.stl --kind small-vessel --max-size 120 --mirror yz --rotate x:90
//! ```
//!
//! Parameters come from `--params <json>` when given, then individual flags
//! override single fields. Log verbosity follows `RUST_LOG`; `-v` switches
//! the default to debug.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use blueprint::{BlockType, BlueprintKind};
use clap::{Parser, ValueEnum};
use converter::{output_file_name, spawn_conversion, ConversionRequest, MeshSource};
use log::LevelFilter;
use mesh_ingest::LoaderRegistry;
use voxel_core::{Axis, ConversionParameters, MirrorPlane};

/// Convert a triangle mesh into a voxel blueprint
#[derive(Parser, Debug)]
#[command(name = "mesh2bp", version, about, long_about = None)]
struct Cli {
    /// Input mesh file (.stl)
    input: PathBuf,

    /// Output blueprint path [default: <display name>.json next to the input]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Template blueprint holding only a core block
    #[arg(long)]
    template: Option<PathBuf>,

    /// Display name of the blueprint
    #[arg(short, long)]
    name: Option<String>,

    /// Blueprint kind, used when no template is given
    #[arg(long, value_enum, default_value_t = KindArg::CapitalVessel)]
    kind: KindArg,

    /// Hull block id [default: steel block for the blueprint kind]
    #[arg(long, requires = "block_name")]
    block_id: Option<u32>,

    /// Hull block name, registered in the block map
    #[arg(long, requires = "block_id")]
    block_name: Option<String>,

    /// JSON file with conversion parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Voxels per mesh unit
    #[arg(long)]
    resolution: Option<f64>,

    /// Size of the largest dimension after scaling
    #[arg(long)]
    max_size: Option<u32>,

    /// Erosion radius
    #[arg(long)]
    erosion: Option<u32>,

    /// Dilation radius
    #[arg(long)]
    dilation: Option<u32>,

    /// Hollow shell thickness
    #[arg(long)]
    hollow_radius: Option<u32>,

    /// Keep the interior solid
    #[arg(long)]
    no_hollow: bool,

    /// Voxelize one half and mirror it across this plane
    #[arg(long, value_enum)]
    mirror: Option<PlaneArg>,

    /// Rotate before conversion, e.g. `x:90` (repeatable, applied in order)
    #[arg(long, value_parser = parse_rotation)]
    rotate: Vec<(Axis, f64)>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    SmallVessel,
    HoverVessel,
    CapitalVessel,
    Base,
}

impl From<KindArg> for BlueprintKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::SmallVessel => BlueprintKind::SmallVessel,
            KindArg::HoverVessel => BlueprintKind::HoverVessel,
            KindArg::CapitalVessel => BlueprintKind::CapitalVessel,
            KindArg::Base => BlueprintKind::Base,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlaneArg {
    Xy,
    Xz,
    Yz,
}

impl From<PlaneArg> for MirrorPlane {
    fn from(plane: PlaneArg) -> Self {
        match plane {
            PlaneArg::Xy => MirrorPlane::Xy,
            PlaneArg::Xz => MirrorPlane::Xz,
            PlaneArg::Yz => MirrorPlane::Yz,
        }
    }
}

fn parse_rotation(value: &str) -> Result<(Axis, f64), String> {
    let (axis, degrees) = value
        .split_once(':')
        .ok_or_else(|| format!("expected <axis>:<degrees>, got '{value}'"))?;
    let axis = match axis.trim().to_ascii_lowercase().as_str() {
        "x" => Axis::X,
        "y" => Axis::Y,
        "z" => Axis::Z,
        other => return Err(format!("unknown axis '{other}', expected x, y or z")),
    };
    let degrees: f64 = degrees
        .trim()
        .parse()
        .map_err(|_| format!("invalid angle '{degrees}'"))?;
    if !degrees.is_finite() {
        return Err(format!("invalid angle '{degrees}'"));
    }
    Ok((axis, degrees))
}

fn load_params(path: Option<&Path>) -> Result<ConversionParameters> {
    let Some(path) = path else {
        return Ok(ConversionParameters::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read parameters from {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("invalid parameters file {}", path.display()))
}

impl Cli {
    fn parameters(&self) -> Result<ConversionParameters> {
        let mut params = load_params(self.params.as_deref())?;

        if let Some(resolution) = self.resolution {
            params.resolution = resolution;
        }
        if let Some(max_size) = self.max_size {
            params.max_size = max_size;
        }
        if let Some(erosion) = self.erosion {
            params.erosion_radius = erosion;
        }
        if let Some(dilation) = self.dilation {
            params.dilation_radius = dilation;
        }
        if let Some(radius) = self.hollow_radius {
            params.hollow_radius = radius;
        }
        if self.no_hollow {
            params.hollow_enabled = false;
        }
        if let Some(plane) = self.mirror {
            params.mirror_plane = plane.into();
            params.mirror_enabled = true;
        }

        Ok(params)
    }

    fn request(&self) -> Result<ConversionRequest> {
        if !self.input.is_file() {
            bail!("input mesh not found: {}", self.input.display());
        }

        let display_name = self
            .name
            .clone()
            .unwrap_or_else(|| config::constants::DEFAULT_DISPLAY_NAME.to_string());
        let output = self.output.clone().unwrap_or_else(|| {
            self.input
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(output_file_name(&display_name))
        });

        let mut request = ConversionRequest::new(MeshSource::File(self.input.clone()), output);
        request.template = self.template.clone();
        request.display_name = display_name;
        request.kind = self.kind.into();
        request.hull = self
            .block_id
            .zip(self.block_name.clone())
            .map(|(id, name)| BlockType::new(id, name));
        request.rotations = self.rotate.clone();
        request.params = self.parameters()?;
        Ok(request)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_env("RUST_LOG")
        .init();

    let request = cli.request()?;
    request
        .params
        .validate()
        .context("invalid conversion parameters")?;

    let handle = spawn_conversion(request, LoaderRegistry::with_defaults());
    for message in handle.progress() {
        log::info!("{message}");
    }

    let outcome = handle.join().context("conversion failed")?;
    let stats = &outcome.stats;
    log::info!(
        "{} triangles -> {} blocks ({}x{}x{}), {} skipped, {:.2}s",
        stats.input_triangles,
        stats.final_voxels,
        stats.final_size.x,
        stats.final_size.y,
        stats.final_size.z,
        outcome.assembly.skipped,
        stats.elapsed.as_secs_f64()
    );
    println!("{}", outcome.output.display());
    Ok(())
}
