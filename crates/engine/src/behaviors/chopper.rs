//! Tree chopper: one broken log fells the whole tree.

use rand::Rng;
use tracing::debug;

use relictools_core::{
    blocks, is_log, BlockAccess, DropSink, ItemStack, ModifierKind, Notifier,
};

use crate::behaviors::{drop_location, merge_drops};
use crate::drops::{apply_yield_bonus, base_drop, chopping_bonus_eligible};
use crate::events::BlockBreak;
use crate::messages;
use crate::search::find_tree;

/// Drops farther than this (squared blocks) come to the actor instead.
const RELOCATE_DIST_SQ: i64 = 100;

/// Handle a block break with the chopper in hand. Returns true when the
/// break was absorbed into a tree fell.
pub fn on_break(
    event: BlockBreak,
    item: &ItemStack,
    world: &mut dyn BlockAccess,
    sink: &mut dyn DropSink,
    notifier: &dyn Notifier,
    rng: &mut impl Rng,
) -> bool {
    if !is_log(world.block_at(event.pos)) {
        return false;
    }
    let Some(tree) = find_tree(world, event.pos) else {
        return false;
    };

    let level = item.modifier_level(ModifierKind::YieldBonus);
    let silk = item.has_modifier(ModifierKind::SilkTouch);

    let mut harvested = Vec::with_capacity(tree.logs.len());
    for &pos in &tree.logs {
        if let Some(drop) = base_drop(world.block_at(pos)) {
            harvested.push(apply_yield_bonus(
                drop,
                level,
                silk,
                chopping_bonus_eligible,
                rng,
            ));
        }
        world.set_block(pos, blocks::AIR);
    }
    for &pos in &tree.leaves {
        world.set_block(pos, blocks::AIR);
    }

    let at = drop_location(event.pos, event.actor_pos, RELOCATE_DIST_SQ);
    sink.drop_items(at, &merge_drops(harvested));
    notifier.send(event.actor, &messages::tree_felled(tree.block_count()));
    debug!(
        logs = tree.logs.len(),
        leaves = tree.leaves.len(),
        "felled tree"
    );
    true
}
