//! Per-kind tool behaviors.
//!
//! Each behavior takes the host event plus the ports it needs and
//! returns whether the default game action should be suppressed. The
//! dispatch from item-in-hand to behavior lives in `ToolService`.

pub mod bucket;
pub mod chopper;
pub mod pickaxe;
pub mod rocket;
pub mod sell_axe;
pub mod torch;

use std::collections::BTreeMap;

use relictools_core::{BlockPos, DropStack};

/// Merge per-cell drops into one stack per block id.
pub(crate) fn merge_drops(drops: impl IntoIterator<Item = DropStack>) -> Vec<DropStack> {
    let mut by_block: BTreeMap<u16, u32> = BTreeMap::new();
    for drop in drops {
        *by_block.entry(drop.block).or_default() += drop.count;
    }
    by_block
        .into_iter()
        .map(|(block, count)| DropStack::new(block, count))
        .collect()
}

/// Where to deliver drops: at the broken block, unless the actor is
/// farther than `max_dist_sq`, in which case they come to the actor.
pub(crate) fn drop_location(broken: BlockPos, actor: BlockPos, max_dist_sq: i64) -> BlockPos {
    if broken.distance_sq(actor) > max_dist_sq {
        actor
    } else {
        broken
    }
}
