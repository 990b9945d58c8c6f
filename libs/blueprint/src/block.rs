//! # Block Types
//!
//! Named block identifiers and the blueprint kinds that select a default
//! hull block.

use std::fmt;

use config::constants::{
    CORE_BLOCK_ID, CORE_BLOCK_NAME, STEEL_BLOCK_LARGE_ID, STEEL_BLOCK_LARGE_NAME,
    STEEL_BLOCK_SMALL_ID, STEEL_BLOCK_SMALL_NAME,
};
use serde::{Deserialize, Serialize};

/// Kind of structure a blueprint describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlueprintKind {
    /// Small vessel
    SmallVessel,
    /// Hover vessel
    HoverVessel,
    /// Capital vessel
    #[default]
    CapitalVessel,
    /// Base
    Base,
}

impl BlueprintKind {
    /// Small and hover vessels build from small blocks.
    pub fn uses_small_blocks(self) -> bool {
        matches!(self, Self::SmallVessel | Self::HoverVessel)
    }
}

impl fmt::Display for BlueprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SmallVessel => "small vessel",
            Self::HoverVessel => "hover vessel",
            Self::CapitalVessel => "capital vessel",
            Self::Base => "base",
        };
        f.write_str(name)
    }
}

/// A block identifier and the name it is registered under in a block map.
///
/// # Example
///
/// ```rust
/// use blueprint::{BlockType, BlueprintKind};
///
/// assert_eq!(BlockType::default_hull_for(BlueprintKind::HoverVessel).id, 381);
/// assert_eq!(BlockType::default_hull_for(BlueprintKind::Base).name, "HullFullLarge");
/// assert_eq!(BlockType::core().id, 558);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockType {
    /// Numeric block identifier
    pub id: u32,
    /// Block map name
    pub name: String,
}

impl BlockType {
    /// Creates a block type.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The core anchor block.
    pub fn core() -> Self {
        Self::new(CORE_BLOCK_ID, CORE_BLOCK_NAME)
    }

    /// Full steel hull block for small structures.
    pub fn steel_small() -> Self {
        Self::new(STEEL_BLOCK_SMALL_ID, STEEL_BLOCK_SMALL_NAME)
    }

    /// Full steel hull block for large structures.
    pub fn steel_large() -> Self {
        Self::new(STEEL_BLOCK_LARGE_ID, STEEL_BLOCK_LARGE_NAME)
    }

    /// Hull block used when none is configured.
    pub fn default_hull_for(kind: BlueprintKind) -> Self {
        if kind.uses_small_blocks() {
            Self::steel_small()
        } else {
            Self::steel_large()
        }
    }

    /// Returns true for the core anchor block.
    pub fn is_core(&self) -> bool {
        self.id == CORE_BLOCK_ID
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hull_per_kind() {
        assert_eq!(
            BlockType::default_hull_for(BlueprintKind::SmallVessel),
            BlockType::steel_small()
        );
        assert_eq!(
            BlockType::default_hull_for(BlueprintKind::CapitalVessel),
            BlockType::steel_large()
        );
    }

    #[test]
    fn test_kind_serde_names() {
        let json = serde_json::to_string(&BlueprintKind::HoverVessel).unwrap();
        assert_eq!(json, "\"hover_vessel\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockType::core().to_string(), "Core (558)");
        assert!(BlockType::core().is_core());
        assert!(!BlockType::steel_large().is_core());
    }
}
