//! Block ids, coordinates, and the material predicates the area-effect
//! tools care about.
//!
//! The engine only ever sees blocks through the [`crate::BlockAccess`]
//! port, so the id space here is deliberately small: enough vocabulary to
//! express "log", "leaf", "water", "ore", "minable stone", and the few
//! support/replaceable distinctions torch placement needs.

use serde::{Deserialize, Serialize};

/// Numeric block identifier.
pub type BlockId = u16;

/// Block ids the tool behaviors recognize.
pub mod blocks {
    use super::BlockId;

    pub const AIR: BlockId = 0;
    pub const STONE: BlockId = 1;
    pub const DIRT: BlockId = 2;
    pub const GRASS: BlockId = 3;
    pub const SAND: BlockId = 4;
    pub const GRAVEL: BlockId = 5;
    pub const BEDROCK: BlockId = 7;
    pub const WATER: BlockId = 8;
    pub const LAVA: BlockId = 9;

    pub const OAK_LOG: BlockId = 11;
    pub const OAK_LEAVES: BlockId = 12;
    pub const BIRCH_LOG: BlockId = 13;
    pub const BIRCH_LEAVES: BlockId = 14;
    pub const PINE_LOG: BlockId = 15;
    pub const PINE_LEAVES: BlockId = 16;

    pub const COBBLESTONE: BlockId = 20;
    pub const GRANITE: BlockId = 21;
    pub const DIORITE: BlockId = 22;
    pub const ANDESITE: BlockId = 23;
    pub const DEEPSLATE: BlockId = 24;
    pub const SANDSTONE: BlockId = 25;
    pub const OBSIDIAN: BlockId = 26;

    pub const COAL_ORE: BlockId = 30;
    pub const IRON_ORE: BlockId = 31;
    pub const GOLD_ORE: BlockId = 32;
    pub const COPPER_ORE: BlockId = 33;
    pub const REDSTONE_ORE: BlockId = 34;
    pub const LAPIS_ORE: BlockId = 35;
    pub const DIAMOND_ORE: BlockId = 36;
    pub const EMERALD_ORE: BlockId = 37;

    pub const TORCH: BlockId = 40;
    pub const WALL_TORCH: BlockId = 41;
    pub const CHEST: BlockId = 42;
    pub const TRAPPED_CHEST: BlockId = 43;
    pub const SPAWNER: BlockId = 44;
    pub const MAGMA_BLOCK: BlockId = 45;
    pub const ICE: BlockId = 46;

    pub const TALL_GRASS: BlockId = 50;
    pub const SNOW_LAYER: BlockId = 51;
    pub const FIRE: BlockId = 52;
}

/// Stable lowercase name for a block id, used by the configuration
/// exclusion list. Returns `None` for ids outside the known vocabulary.
pub fn block_name(id: BlockId) -> Option<&'static str> {
    use blocks::*;
    Some(match id {
        AIR => "air",
        STONE => "stone",
        DIRT => "dirt",
        GRASS => "grass",
        SAND => "sand",
        GRAVEL => "gravel",
        BEDROCK => "bedrock",
        WATER => "water",
        LAVA => "lava",
        OAK_LOG => "oak_log",
        OAK_LEAVES => "oak_leaves",
        BIRCH_LOG => "birch_log",
        BIRCH_LEAVES => "birch_leaves",
        PINE_LOG => "pine_log",
        PINE_LEAVES => "pine_leaves",
        COBBLESTONE => "cobblestone",
        GRANITE => "granite",
        DIORITE => "diorite",
        ANDESITE => "andesite",
        DEEPSLATE => "deepslate",
        SANDSTONE => "sandstone",
        OBSIDIAN => "obsidian",
        COAL_ORE => "coal_ore",
        IRON_ORE => "iron_ore",
        GOLD_ORE => "gold_ore",
        COPPER_ORE => "copper_ore",
        REDSTONE_ORE => "redstone_ore",
        LAPIS_ORE => "lapis_ore",
        DIAMOND_ORE => "diamond_ore",
        EMERALD_ORE => "emerald_ore",
        TORCH => "torch",
        WALL_TORCH => "wall_torch",
        CHEST => "chest",
        TRAPPED_CHEST => "trapped_chest",
        SPAWNER => "spawner",
        MAGMA_BLOCK => "magma_block",
        ICE => "ice",
        TALL_GRASS => "tall_grass",
        SNOW_LAYER => "snow_layer",
        FIRE => "fire",
        _ => return None,
    })
}

/// True for trunk blocks the tree chopper fells.
pub fn is_log(id: BlockId) -> bool {
    matches!(id, blocks::OAK_LOG | blocks::BIRCH_LOG | blocks::PINE_LOG)
}

/// True for canopy blocks that may belong to a tree.
pub fn is_leaf(id: BlockId) -> bool {
    matches!(
        id,
        blocks::OAK_LEAVES | blocks::BIRCH_LEAVES | blocks::PINE_LEAVES
    )
}

/// True for source water blocks the bucket drains.
pub fn is_water(id: BlockId) -> bool {
    id == blocks::WATER
}

/// True for any liquid (never excavated, never a torch support).
pub fn is_liquid(id: BlockId) -> bool {
    matches!(id, blocks::WATER | blocks::LAVA)
}

/// True for ore blocks eligible for the yield bonus.
pub fn is_bonus_ore(id: BlockId) -> bool {
    matches!(
        id,
        blocks::COAL_ORE
            | blocks::COPPER_ORE
            | blocks::REDSTONE_ORE
            | blocks::LAPIS_ORE
            | blocks::DIAMOND_ORE
            | blocks::EMERALD_ORE
    )
}

/// True for blocks the excavation pickaxe can mine.
pub fn is_pickaxe_minable(id: BlockId) -> bool {
    matches!(
        id,
        blocks::STONE
            | blocks::COBBLESTONE
            | blocks::GRANITE
            | blocks::DIORITE
            | blocks::ANDESITE
            | blocks::DEEPSLATE
            | blocks::SANDSTONE
            | blocks::OBSIDIAN
            | blocks::MAGMA_BLOCK
            | blocks::COAL_ORE
            | blocks::IRON_ORE
            | blocks::GOLD_ORE
            | blocks::COPPER_ORE
            | blocks::REDSTONE_ORE
            | blocks::LAPIS_ORE
            | blocks::DIAMOND_ORE
            | blocks::EMERALD_ORE
    )
}

/// True for blocks a torch may overwrite when placed.
pub fn is_replaceable(id: BlockId) -> bool {
    matches!(
        id,
        blocks::AIR | blocks::TALL_GRASS | blocks::SNOW_LAYER | blocks::FIRE
    )
}

/// True for blocks solid enough to carry an attached torch.
pub fn is_solid(id: BlockId) -> bool {
    !matches!(
        id,
        blocks::AIR
            | blocks::WATER
            | blocks::LAVA
            | blocks::FIRE
            | blocks::TALL_GRASS
            | blocks::SNOW_LAYER
    )
}

/// True for supports torches must not attach to.
pub fn is_torch_support_excluded(id: BlockId) -> bool {
    matches!(id, blocks::MAGMA_BLOCK | blocks::ICE | blocks::SPAWNER)
}

/// Axis-aligned face of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Up,
    Down,
    North,
    South,
    East,
    West,
}

impl Face {
    /// Unit offset pointing out of this face.
    pub fn offset(self) -> (i32, i32, i32) {
        match self {
            Face::Up => (0, 1, 0),
            Face::Down => (0, -1, 0),
            Face::North => (0, 0, -1),
            Face::South => (0, 0, 1),
            Face::East => (1, 0, 0),
            Face::West => (-1, 0, 0),
        }
    }

    /// The opposite face.
    pub fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
        }
    }
}

/// Absolute block coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Translate by an offset.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The neighbor through `face`.
    pub fn relative(self, face: Face) -> Self {
        let (dx, dy, dz) = face.offset();
        self.offset(dx, dy, dz)
    }

    /// The six axis-aligned neighbors.
    pub fn neighbors6(self) -> [BlockPos; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.offset(0, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }

    /// The eight surrounding positions in the same horizontal plane.
    /// Overlaps the axis set on the four straight neighbors; traversals
    /// deduplicate through their visited sets.
    pub fn planar_ring(self) -> [BlockPos; 8] {
        [
            self.offset(1, 0, 1),
            self.offset(1, 0, 0),
            self.offset(1, 0, -1),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
            self.offset(-1, 0, 1),
            self.offset(-1, 0, 0),
            self.offset(-1, 0, -1),
        ]
    }

    /// Squared Euclidean distance to another coordinate.
    pub fn distance_sq(self, other: BlockPos) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        let dz = (self.z - other.z) as i64;
        dx * dx + dy * dy + dz * dz
    }
}
