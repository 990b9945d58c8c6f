//! # Grid Blueprint
//!
//! Sparse in-memory blueprint: a grid size, a block map (name → id) and the
//! occupied cells. Persisted as pretty-printed JSON.
//!
//! ## File Layout
//!
//! ```json
//! {
//!   "kind": "capital_vessel",
//!   "display_name": "ConvertedMesh",
//!   "size": [5, 3, 3],
//!   "block_map": { "Core": 558, "HullFullLarge": 403 },
//!   "blocks": [ { "position": [1, 1, 1], "id": 403 } ]
//! }
//! ```
//!
//! Blocks are written sorted by position so the same blueprint always
//! produces the same file.

use std::collections::{BTreeMap, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use config::constants::CORE_BLOCK_ID;
use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::block::{BlockType, BlueprintKind};
use crate::container::BlueprintContainer;
use crate::error::{BlueprintError, BlueprintResult};

/// In-memory blueprint with JSON persistence.
///
/// # Example
///
/// ```rust
/// use glam::IVec3;
/// use blueprint::{BlueprintContainer, BlueprintKind, GridBlueprint};
///
/// let mut grid = GridBlueprint::new(BlueprintKind::Base);
/// grid.resize(IVec3::splat(4));
/// grid.register_block("HullFullLarge", 403);
/// grid.set_block(IVec3::new(1, 2, 3), 403);
/// assert_eq!(grid.block_at(IVec3::new(1, 2, 3)), Some(403));
/// assert_eq!(grid.block_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BlueprintFile", into = "BlueprintFile")]
pub struct GridBlueprint {
    kind: BlueprintKind,
    display_name: String,
    size: IVec3,
    block_map: BTreeMap<String, u32>,
    blocks: HashMap<IVec3, u32>,
}

impl GridBlueprint {
    /// Creates an empty blueprint of the given kind with a zero-sized grid.
    pub fn new(kind: BlueprintKind) -> Self {
        Self {
            kind,
            display_name: String::new(),
            size: IVec3::ZERO,
            block_map: BTreeMap::new(),
            blocks: HashMap::new(),
        }
    }

    /// Creates the minimal template for `kind`: a one-cell grid holding only
    /// the core block at the origin.
    pub fn template(kind: BlueprintKind) -> Self {
        let mut grid = Self::new(kind);
        grid.size = IVec3::ONE;
        grid.ensure_block(&BlockType::core());
        grid.blocks.insert(IVec3::ZERO, CORE_BLOCK_ID);
        grid
    }

    /// Reads a blueprint from a JSON file.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, `Serialization` when its content
    /// is not a blueprint.
    pub fn load(path: impl AsRef<Path>) -> BlueprintResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| BlueprintError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let grid: Self = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            BlueprintError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;

        log::debug!(
            "loaded {} blueprint '{}' with {} blocks from {}",
            grid.kind,
            grid.display_name,
            grid.block_count(),
            path.display()
        );
        Ok(grid)
    }

    /// Loads a template and checks it holds a single core block.
    pub fn load_template(path: impl AsRef<Path>) -> BlueprintResult<Self> {
        let grid = Self::load(path)?;
        grid.validate_template()?;
        Ok(grid)
    }

    /// Checks the blueprint is usable as a template.
    ///
    /// A template holds exactly one block: the core, at the grid origin.
    /// Assembly clears that cell before placing the hull, so the output ends
    /// up with exactly one core.
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` when the blueprint is empty, holds any block other
    /// than the core, holds more than one core, or has its core elsewhere.
    pub fn validate_template(&self) -> BlueprintResult<()> {
        if self.blocks.is_empty() {
            return Err(BlueprintError::invalid_template(
                "template contains no blocks",
            ));
        }

        let extra = self.non_core_block_count();
        if extra > 0 {
            return Err(BlueprintError::invalid_template(format!(
                "template must contain only core blocks, found {extra} other block(s)"
            )));
        }

        let cores = self.blocks.len();
        if cores > 1 {
            return Err(BlueprintError::invalid_template(format!(
                "template must contain exactly one core block, found {cores}"
            )));
        }

        if self.block_at(IVec3::ZERO) != Some(CORE_BLOCK_ID) {
            return Err(BlueprintError::invalid_template(
                "template core block must sit at the grid origin",
            ));
        }
        Ok(())
    }

    /// Blueprint kind.
    pub fn kind(&self) -> BlueprintKind {
        self.kind
    }

    /// Display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Grid size in cells per axis.
    pub fn size(&self) -> IVec3 {
        self.size
    }

    /// Block map entries, sorted by name.
    pub fn block_map(&self) -> &BTreeMap<String, u32> {
        &self.block_map
    }

    /// Block identifier at `position`, if occupied.
    pub fn block_at(&self, position: IVec3) -> Option<u32> {
        self.blocks.get(&position).copied()
    }

    /// Number of occupied cells.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Returns true if `position` lies inside the grid.
    pub fn in_bounds(&self, position: IVec3) -> bool {
        position.cmpge(IVec3::ZERO).all() && position.cmplt(self.size).all()
    }

    /// Occupied cells sorted by position.
    pub fn blocks(&self) -> Vec<(IVec3, u32)> {
        let mut blocks: Vec<(IVec3, u32)> = self.blocks.iter().map(|(&p, &id)| (p, id)).collect();
        blocks.sort_unstable_by_key(|(p, _)| (p.x, p.y, p.z));
        blocks
    }

    /// Number of cells per block identifier.
    pub fn block_counts(&self) -> BTreeMap<u32, usize> {
        let mut counts = BTreeMap::new();
        for &id in self.blocks.values() {
            *counts.entry(id).or_insert(0) += 1;
        }
        counts
    }

    /// Number of occupied cells that are not core blocks.
    pub fn non_core_block_count(&self) -> usize {
        self.blocks.values().filter(|&&id| id != CORE_BLOCK_ID).count()
    }
}

impl BlueprintContainer for GridBlueprint {
    fn block_id(&self, name: &str) -> Option<u32> {
        self.block_map.get(name).copied()
    }

    fn register_block(&mut self, name: &str, id: u32) {
        self.block_map.insert(name.to_string(), id);
    }

    fn set_block(&mut self, position: IVec3, id: u32) {
        self.blocks.insert(position, id);
    }

    fn remove_block(&mut self, position: IVec3) -> Option<u32> {
        self.blocks.remove(&position)
    }

    fn resize(&mut self, size: IVec3) {
        self.size = size;
        let before = self.blocks.len();
        self.blocks
            .retain(|p, _| p.cmpge(IVec3::ZERO).all() && p.cmplt(size).all());
        if self.blocks.len() < before {
            log::debug!(
                "resize to {size} dropped {} blocks",
                before - self.blocks.len()
            );
        }
    }

    fn set_display_name(&mut self, name: &str) {
        self.display_name = name.to_string();
    }

    fn save(&self, path: &Path) -> BlueprintResult<()> {
        let io_error = |source: std::io::Error| BlueprintError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|source| {
            BlueprintError::Serialization {
                path: path.to_path_buf(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(io_error)?;
        writer.flush().map_err(io_error)?;

        log::info!(
            "saved blueprint '{}' ({} blocks) to {}",
            self.display_name,
            self.blocks.len(),
            path.display()
        );
        Ok(())
    }
}

/// Serialized form of [`GridBlueprint`].
#[derive(Serialize, Deserialize)]
struct BlueprintFile {
    kind: BlueprintKind,
    #[serde(default)]
    display_name: String,
    size: IVec3,
    #[serde(default)]
    block_map: BTreeMap<String, u32>,
    #[serde(default)]
    blocks: Vec<BlockEntry>,
}

#[derive(Serialize, Deserialize)]
struct BlockEntry {
    position: IVec3,
    id: u32,
}

impl From<BlueprintFile> for GridBlueprint {
    fn from(file: BlueprintFile) -> Self {
        Self {
            kind: file.kind,
            display_name: file.display_name,
            size: file.size,
            block_map: file.block_map,
            blocks: file.blocks.into_iter().map(|b| (b.position, b.id)).collect(),
        }
    }
}

impl From<GridBlueprint> for BlueprintFile {
    fn from(grid: GridBlueprint) -> Self {
        let blocks = grid
            .blocks()
            .into_iter()
            .map(|(position, id)| BlockEntry { position, id })
            .collect();
        Self {
            kind: grid.kind,
            display_name: grid.display_name,
            size: grid.size,
            block_map: grid.block_map,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_valid() {
        let template = GridBlueprint::template(BlueprintKind::SmallVessel);
        assert!(template.validate_template().is_ok());
        assert_eq!(template.block_at(IVec3::ZERO), Some(CORE_BLOCK_ID));
        assert_eq!(template.block_id("Core"), Some(CORE_BLOCK_ID));
    }

    #[test]
    fn test_template_with_hull_rejected() {
        let mut template = GridBlueprint::template(BlueprintKind::Base);
        template.set_block(IVec3::X, 403);
        let err = template.validate_template().unwrap_err();
        assert!(matches!(err, BlueprintError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_template_needs_exactly_one_core_at_origin() {
        let empty = GridBlueprint::new(BlueprintKind::Base);
        assert!(matches!(
            empty.validate_template(),
            Err(BlueprintError::InvalidTemplate { .. })
        ));

        let mut two_cores = GridBlueprint::template(BlueprintKind::Base);
        two_cores.resize(IVec3::new(4, 1, 1));
        two_cores.set_block(IVec3::new(2, 0, 0), CORE_BLOCK_ID);
        assert!(matches!(
            two_cores.validate_template(),
            Err(BlueprintError::InvalidTemplate { .. })
        ));

        let mut moved = GridBlueprint::template(BlueprintKind::Base);
        moved.resize(IVec3::new(4, 1, 1));
        moved.remove_block(IVec3::ZERO);
        moved.set_block(IVec3::new(2, 0, 0), CORE_BLOCK_ID);
        assert!(matches!(
            moved.validate_template(),
            Err(BlueprintError::InvalidTemplate { .. })
        ));
    }

    #[test]
    fn test_ensure_block_keeps_existing_id() {
        let mut grid = GridBlueprint::new(BlueprintKind::Base);
        grid.register_block("HullFullLarge", 999);
        grid.ensure_block(&BlockType::steel_large());
        assert_eq!(grid.block_id("HullFullLarge"), Some(999));
        grid.ensure_block(&BlockType::core());
        assert_eq!(grid.block_id("Core"), Some(CORE_BLOCK_ID));
    }

    #[test]
    fn test_counts() {
        let mut grid = GridBlueprint::new(BlueprintKind::Base);
        grid.resize(IVec3::splat(3));
        grid.set_block(IVec3::ZERO, 403);
        grid.set_block(IVec3::ONE, 403);
        grid.set_block(IVec3::splat(2), CORE_BLOCK_ID);
        assert_eq!(grid.block_counts(), BTreeMap::from([(403, 2), (CORE_BLOCK_ID, 1)]));
        assert_eq!(grid.non_core_block_count(), 2);
    }

    #[test]
    fn test_resize_drops_outside_blocks() {
        let mut grid = GridBlueprint::new(BlueprintKind::Base);
        grid.resize(IVec3::splat(4));
        grid.set_block(IVec3::splat(3), 403);
        grid.set_block(IVec3::ONE, 403);
        grid.resize(IVec3::splat(2));
        assert_eq!(grid.block_count(), 1);
        assert!(grid.in_bounds(IVec3::ONE));
        assert!(!grid.in_bounds(IVec3::new(0, 2, 0)));
        assert!(!grid.in_bounds(IVec3::new(-1, 0, 0)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("ship.json");

        let mut grid = GridBlueprint::template(BlueprintKind::HoverVessel);
        grid.resize(IVec3::new(3, 2, 2));
        grid.set_display_name("Skiff");
        grid.ensure_block(&BlockType::steel_small());
        grid.set_block(IVec3::new(2, 1, 1), 381);
        grid.save(&path).unwrap();

        let loaded = GridBlueprint::load(&path).unwrap();
        assert_eq!(loaded, grid);
        assert_eq!(loaded.display_name(), "Skiff");
        assert_eq!(loaded.kind(), BlueprintKind::HoverVessel);
    }

    #[test]
    fn test_saved_json_is_sorted() {
        let mut grid = GridBlueprint::new(BlueprintKind::Base);
        grid.resize(IVec3::splat(3));
        grid.set_block(IVec3::new(2, 0, 0), 1);
        grid.set_block(IVec3::new(0, 0, 1), 2);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["blocks"][0]["position"], serde_json::json!([0, 0, 1]));
        assert_eq!(json["size"], serde_json::json!([3, 3, 3]));
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = GridBlueprint::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, BlueprintError::Io { .. }));

        let garbage = dir.path().join("garbage.json");
        fs::write(&garbage, "{ not json").unwrap();
        let err = GridBlueprint::load(&garbage).unwrap_err();
        assert!(matches!(err, BlueprintError::Serialization { .. }));
    }

    #[test]
    fn test_load_template_rejects_hull() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.json");
        let mut grid = GridBlueprint::template(BlueprintKind::Base);
        grid.resize(IVec3::splat(2));
        grid.set_block(IVec3::ONE, 403);
        grid.save(&path).unwrap();

        assert!(matches!(
            GridBlueprint::load_template(&path),
            Err(BlueprintError::InvalidTemplate { .. })
        ));
    }
}
