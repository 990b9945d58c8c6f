//! # Blueprint Assembly
//!
//! Places a translated voxel set into a blueprint container.
//!
//! ## Algorithm Overview
//!
//! 1. Grid size is the voxel bounding size plus one cell of padding on each
//!    side
//! 2. The block at the grid origin is removed (a template's core)
//! 3. The hull block is registered if its name is not in the block map yet
//! 4. Every voxel is written at `voxel + padding`; positions outside the grid
//!    are skipped and reported
//! 5. The core block is written at `size / 2`, replacing a hull block that
//!    may already sit there


use config::constants::BLUEPRINT_PADDING;
use glam::IVec3;
use voxel_core::{BoundingBox, ProgressSink, VoxelSet};

use crate::block::BlockType;
use crate::container::BlueprintContainer;

/// Progress message for a voxel that falls outside the grid.
pub const OUT_OF_BOUNDS_MESSAGE: &str = "Tried to place block outside blueprint bounds";

/// Outcome of [`assemble`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyReport {
    /// Grid size written to the container
    pub grid_size: IVec3,
    /// Hull blocks written (including one later replaced by the core)
    pub placed: usize,
    /// Voxels skipped because they fell outside the grid
    pub skipped: usize,
    /// Where the core block went
    pub core_position: IVec3,
    /// True when the core replaced a hull block
    pub core_replaced_hull: bool,
}

/// Writes `voxels` as `hull` blocks plus the core anchor into `container`.
///
/// `bounds` must be the bounds of `voxels`, normally as returned by
/// `translate_to_origin`.
pub fn assemble<C>(
    container: &mut C,
    voxels: &VoxelSet,
    bounds: &BoundingBox,
    hull: &BlockType,
    progress: &dyn ProgressSink,
) -> AssemblyReport
where
    C: BlueprintContainer + ?Sized,
{
    let padding = IVec3::splat(BLUEPRINT_PADDING);
    let grid_size = bounds.size() + padding * 2;
    let core_position = grid_size / 2;

    container.resize(grid_size);
    container.remove_block(IVec3::ZERO);
    container.ensure_block(hull);

    let mut placed = 0;
    let mut skipped = 0;
    for voxel in voxels.to_sorted_vec() {
        let position = voxel + padding;
        if in_grid(position, grid_size) {
            container.set_block(position, hull.id);
            placed += 1;
        } else {
            log::warn!("voxel {voxel} lands at {position}, outside grid {grid_size}");
            progress.report(OUT_OF_BOUNDS_MESSAGE);
            skipped += 1;
        }
    }

    let core = BlockType::core();
    container.ensure_block(&core);
    let core_replaced_hull = voxels.contains(core_position - padding);
    container.set_block(core_position, core.id);

    log::info!(
        "assembled {placed} {hull} blocks into a {grid_size} grid ({skipped} skipped), core at {core_position}"
    );

    AssemblyReport {
        grid_size,
        placed,
        skipped,
        core_position,
        core_replaced_hull,
    }
}

fn in_grid(position: IVec3, size: IVec3) -> bool {
    position.cmpge(IVec3::ZERO).all() && position.cmplt(size).all()
}
