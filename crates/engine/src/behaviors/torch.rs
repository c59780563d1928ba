//! Everlasting torch: places a light on a short per-actor cooldown.

use relictools_core::{
    blocks, is_replaceable, is_solid, is_torch_support_excluded, BlockAccess, BlockPos, Notifier,
    ToolKind,
};

use crate::config::ToolsConfig;
use crate::cooldown::CooldownTracker;
use crate::events::InteractionEvent;
use crate::messages;

const COOLDOWN_KEY: &str = match ToolKind::Torch.cooldown_key() {
    Some(key) => key,
    None => panic!("torch is cooldown gated"),
};

fn can_support(id: u16) -> bool {
    is_solid(id) && !is_torch_support_excluded(id)
}

/// A cell takes a torch when it is replaceable and has either a support
/// block below (standing torch) or a solid horizontal neighbor (wall
/// torch). Returns the torch variant to place.
fn placement_at(world: &dyn BlockAccess, pos: BlockPos) -> Option<u16> {
    if !is_replaceable(world.block_at(pos)) {
        return None;
    }
    if can_support(world.block_at(pos.offset(0, -1, 0))) {
        return Some(blocks::TORCH);
    }
    let walls = [
        pos.offset(1, 0, 0),
        pos.offset(-1, 0, 0),
        pos.offset(0, 0, 1),
        pos.offset(0, 0, -1),
    ];
    if walls.iter().any(|&w| can_support(world.block_at(w))) {
        return Some(blocks::WALL_TORCH);
    }
    None
}

/// Handle a right click with the torch in hand. Always consumes the
/// click; the torch item itself is never placed or spent.
pub fn on_use(
    event: InteractionEvent,
    config: &ToolsConfig,
    cooldowns: &CooldownTracker,
    world: &mut dyn BlockAccess,
    notifier: &dyn Notifier,
) -> bool {
    let actor = event.actor;
    if cooldowns.has(actor, COOLDOWN_KEY) {
        let remaining = cooldowns.remaining_secs(actor, COOLDOWN_KEY);
        notifier.send(actor, &messages::cooldown_wait(remaining));
        return true;
    }

    // Preferred spot is the clicked face; failing that, the actor's
    // feet, then the cell above the target.
    let mut candidates = Vec::with_capacity(3);
    if let (Some(target), Some(face)) = (event.target, event.face) {
        candidates.push(target.relative(face));
    }
    candidates.push(event.actor_pos);
    if let Some(target) = event.target {
        candidates.push(target.offset(0, 1, 0));
    }

    for pos in candidates {
        if let Some(variant) = placement_at(world, pos) {
            world.set_block(pos, variant);
            cooldowns.set(actor, COOLDOWN_KEY, config.torch.cooldown_secs);
            notifier.send(actor, &messages::torch_placed());
            return true;
        }
    }
    notifier.send(actor, &messages::torch_invalid_spot());
    true
}
