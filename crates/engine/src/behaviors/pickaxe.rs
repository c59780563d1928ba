//! Excavation pickaxe: one break clears a 3x3x3 cube.

use rand::Rng;
use tracing::debug;

use relictools_core::{
    block_name, blocks, is_pickaxe_minable, BlockAccess, BlockId, DropSink, ItemStack,
    ModifierKind, Notifier,
};

use crate::behaviors::{drop_location, merge_drops};
use crate::config::ToolsConfig;
use crate::drops::{apply_yield_bonus, base_drop, mining_bonus_eligible};
use crate::events::BlockBreak;
use crate::messages;
use crate::search::cube_selection;

/// Drops farther than this (squared blocks) come to the actor instead.
const RELOCATE_DIST_SQ: i64 = 64;

fn excluded(config: &ToolsConfig, id: BlockId) -> bool {
    match block_name(id) {
        Some(name) => config
            .pickaxe
            .excluded_blocks
            .iter()
            .any(|entry| entry == name),
        None => false,
    }
}

/// Handle a block break with the pickaxe in hand. Returns true when the
/// break was absorbed into an excavation (or vetoed by the exclusion
/// list).
pub fn on_break(
    event: BlockBreak,
    item: &ItemStack,
    config: &ToolsConfig,
    world: &mut dyn BlockAccess,
    sink: &mut dyn DropSink,
    notifier: &dyn Notifier,
    rng: &mut impl Rng,
) -> bool {
    let target = world.block_at(event.pos);
    if excluded(config, target) {
        notifier.send(event.actor, &messages::excluded_block());
        return true;
    }
    if !is_pickaxe_minable(target) {
        return false;
    }

    let cells = cube_selection(world, event.pos, |id| {
        is_pickaxe_minable(id) && !excluded(config, id)
    });

    let level = item.modifier_level(ModifierKind::YieldBonus);
    let silk = item.has_modifier(ModifierKind::SilkTouch);

    let mut harvested = Vec::with_capacity(cells.len());
    for &pos in &cells {
        if let Some(drop) = base_drop(world.block_at(pos)) {
            harvested.push(apply_yield_bonus(
                drop,
                level,
                silk,
                mining_bonus_eligible,
                rng,
            ));
        }
        world.set_block(pos, blocks::AIR);
    }

    let at = drop_location(event.pos, event.actor_pos, RELOCATE_DIST_SQ);
    sink.drop_items(at, &merge_drops(harvested));
    notifier.send(event.actor, &messages::excavated(cells.len()));
    debug!(cells = cells.len(), "excavated cube");
    true
}
