//! Sell axe: breaking a chest sells its contents.

use tracing::debug;

use relictools_core::{blocks, BlockAccess, ContainerAccess, Economy, Notifier, ToolError};

use crate::events::BlockBreak;
use crate::messages;

fn is_chest(id: u16) -> bool {
    matches!(id, blocks::CHEST | blocks::TRAPPED_CHEST)
}

/// Handle a block break with the sell axe in hand. Returns true when
/// the break targeted a chest, whether or not a sale happened.
pub fn on_break<W>(
    event: BlockBreak,
    world: &mut W,
    economy: &dyn Economy,
    notifier: &dyn Notifier,
) -> bool
where
    W: BlockAccess + ContainerAccess + ?Sized,
{
    if !is_chest(world.block_at(event.pos)) {
        return false;
    }
    if !economy.available() {
        notifier.send(
            event.actor,
            &messages::error_notice(&ToolError::NoEconomyBackend),
        );
        return true;
    }

    let (contents, value) = {
        let Some(container) = world.container_mut(event.pos) else {
            notifier.send(event.actor, &messages::chest_empty());
            return true;
        };
        if container.is_empty() {
            notifier.send(event.actor, &messages::chest_empty());
            return true;
        }
        let contents = container.drain_all();
        let value = economy.appraise(&contents);
        (contents, value)
    };

    if !economy.deposit(event.actor, value) {
        // Refused credit: put everything back and leave the chest be.
        if let Some(container) = world.container_mut(event.pos) {
            for item in contents {
                container.insert(item);
            }
        }
        notifier.send(event.actor, &messages::sale_refused());
        return true;
    }

    world.set_block(event.pos, blocks::AIR);
    notifier.send(event.actor, &messages::sold(value));
    debug!(value, "sold chest contents");
    true
}
