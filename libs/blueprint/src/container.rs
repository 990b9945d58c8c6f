//! # Blueprint Container
//!
//! The operations the assembler needs from a blueprint. The on-disk layout
//! belongs entirely to the implementation.

use std::path::Path;

use glam::IVec3;

use crate::block::BlockType;
use crate::error::BlueprintResult;

/// A grid-backed blueprint that blocks can be written into.
pub trait BlueprintContainer {
    /// Identifier registered under `name` in the block map.
    fn block_id(&self, name: &str) -> Option<u32>;

    /// Adds or replaces a block map entry.
    fn register_block(&mut self, name: &str, id: u32);

    /// Writes a block at `position`, replacing whatever was there.
    fn set_block(&mut self, position: IVec3, id: u32);

    /// Removes the block at `position`, returning its identifier.
    fn remove_block(&mut self, position: IVec3) -> Option<u32>;

    /// Sets the grid size (cells per axis).
    fn resize(&mut self, size: IVec3);

    /// Sets the name shown for the blueprint.
    fn set_display_name(&mut self, name: &str);

    /// Persists the blueprint to `path`.
    fn save(&self, path: &Path) -> BlueprintResult<()>;

    /// Registers `block` unless its name is already in the block map.
    fn ensure_block(&mut self, block: &BlockType) {
        if self.block_id(&block.name).is_none() {
            self.register_block(&block.name, block.id);
        }
    }
}
