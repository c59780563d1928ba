//! What a harvested block yields.

use rand::Rng;

use relictools_core::blocks;
use relictools_core::{is_bonus_ore, is_leaf, is_liquid, is_log, BlockId, DropStack};

/// Chance each yield-bonus level adds one extra drop.
const BONUS_CHANCE: f64 = 0.33;

/// The plain drop for breaking one block: the block itself, except for
/// cells that yield nothing (air, liquids, leaves decay to nothing).
pub fn base_drop(id: BlockId) -> Option<DropStack> {
    if id == blocks::AIR || is_liquid(id) || is_leaf(id) {
        None
    } else {
        Some(DropStack::new(id, 1))
    }
}

/// Bonus eligibility table for the excavation pickaxe.
pub fn mining_bonus_eligible(id: BlockId) -> bool {
    is_bonus_ore(id)
}

/// Bonus eligibility table for the tree chopper.
pub fn chopping_bonus_eligible(id: BlockId) -> bool {
    is_log(id)
}

/// Apply the yield bonus to a single drop: each modifier level is an
/// independent [`BONUS_CHANCE`] roll for one extra unit. Only blocks the
/// `eligible` table accepts qualify, and a silk-touch tool bypasses the
/// bonus entirely.
pub fn apply_yield_bonus(
    drop: DropStack,
    level: u8,
    silk_touch: bool,
    eligible: impl Fn(BlockId) -> bool,
    rng: &mut impl Rng,
) -> DropStack {
    if level == 0 || silk_touch || !eligible(drop.block) {
        return drop;
    }
    let mut extra = 0;
    for _ in 0..level {
        if rng.gen_bool(BONUS_CHANCE) {
            extra += 1;
        }
    }
    DropStack::new(drop.block, drop.count + extra)
}
