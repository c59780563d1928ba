//! Void bucket: one use drains a patch of connected water.

use tracing::debug;

use relictools_core::{blocks, is_water, BlockAccess, Notifier};

use crate::config::ToolsConfig;
use crate::events::InteractionEvent;
use crate::messages;
use crate::search::{flood_fill, nearest, Neighborhood};

/// Handle a right click with the bucket in hand. Returns true when the
/// click was consumed (something drained, or a no-water notice went out).
pub fn on_use(
    event: InteractionEvent,
    config: &ToolsConfig,
    world: &mut dyn BlockAccess,
    notifier: &dyn Notifier,
) -> bool {
    let Some(target) = event.target else {
        return false;
    };
    // Clicking the shore targets the dry block; the water is behind the
    // clicked face.
    let seed = if is_water(world.block_at(target)) {
        target
    } else {
        match event.face {
            Some(face) if is_water(world.block_at(target.relative(face))) => {
                target.relative(face)
            }
            _ => {
                notifier.send(event.actor, &messages::no_water());
                return true;
            }
        }
    };

    let drain = config.bucket.drain_amount as usize;
    let found = flood_fill(
        world,
        seed,
        is_water,
        drain.saturating_mul(3),
        Neighborhood::WithPlanarDiagonals,
    );
    let drained = nearest(seed, found, drain);
    for &pos in &drained {
        world.set_block(pos, blocks::AIR);
    }
    notifier.send(event.actor, &messages::drained(drained.len()));
    debug!(drained = drained.len(), "drained water");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ClickAction;
    use relictools_core::{ActorId, BlockPos, Face};
    use relictools_testkit::{GridWorld, RecordingNotifier};

    fn click(target: BlockPos, face: Option<Face>) -> InteractionEvent {
        InteractionEvent {
            actor: ActorId::mint(),
            action: ClickAction::RightClickBlock,
            target: Some(target),
            face,
            actor_pos: BlockPos::new(0, 1, 0),
        }
    }

    #[test]
    fn drains_up_to_the_configured_amount_nearest_first() {
        let mut world = GridWorld::new();
        for x in 0..40 {
            world.set(BlockPos::new(x, 0, 0), blocks::WATER);
        }
        let notifier = RecordingNotifier::default();
        let ev = click(BlockPos::new(0, 0, 0), None);

        assert!(on_use(ev, &ToolsConfig::default(), &mut world, &notifier));
        for x in 0..27 {
            assert_eq!(world.get(BlockPos::new(x, 0, 0)), blocks::AIR);
        }
        for x in 27..40 {
            assert_eq!(world.get(BlockPos::new(x, 0, 0)), blocks::WATER);
        }
        assert!(notifier.messages_for(ev.actor)[0].contains("27"));
    }

    #[test]
    fn drains_exactly_the_amount_from_one_end_of_a_line() {
        let mut world = GridWorld::new();
        for x in 0..5 {
            world.set(BlockPos::new(x, 0, 0), blocks::WATER);
        }
        let mut config = ToolsConfig::default();
        config.bucket.drain_amount = 3;
        let notifier = RecordingNotifier::default();
        let ev = click(BlockPos::new(0, 0, 0), None);

        assert!(on_use(ev, &config, &mut world, &notifier));
        for x in 0..3 {
            assert_eq!(world.get(BlockPos::new(x, 0, 0)), blocks::AIR);
        }
        for x in 3..5 {
            assert_eq!(world.get(BlockPos::new(x, 0, 0)), blocks::WATER);
        }
    }

    #[test]
    fn small_pool_drains_completely() {
        let mut world = GridWorld::new();
        for x in 0..3 {
            for z in 0..3 {
                world.set(BlockPos::new(x, 0, z), blocks::WATER);
            }
        }
        let notifier = RecordingNotifier::default();
        let ev = click(BlockPos::new(1, 0, 1), None);

        assert!(on_use(ev, &ToolsConfig::default(), &mut world, &notifier));
        for x in 0..3 {
            for z in 0..3 {
                assert_eq!(world.get(BlockPos::new(x, 0, z)), blocks::AIR);
            }
        }
        assert!(notifier.messages_for(ev.actor)[0].contains("9"));
    }

    #[test]
    fn shore_click_reaches_water_through_the_face() {
        let mut world = GridWorld::new();
        let shore = BlockPos::new(0, 0, 0);
        world.set(shore, blocks::SAND);
        world.set(shore.offset(1, 0, 0), blocks::WATER);
        let notifier = RecordingNotifier::default();
        let ev = click(shore, Some(Face::East));

        assert!(on_use(ev, &ToolsConfig::default(), &mut world, &notifier));
        assert_eq!(world.get(shore.offset(1, 0, 0)), blocks::AIR);
    }

    #[test]
    fn dry_click_notices_no_water() {
        let mut world = GridWorld::new();
        let pos = BlockPos::new(0, 0, 0);
        world.set(pos, blocks::DIRT);
        let notifier = RecordingNotifier::default();
        let ev = click(pos, Some(Face::Up));

        assert!(on_use(ev, &ToolsConfig::default(), &mut world, &notifier));
        assert_eq!(world.get(pos), blocks::DIRT);
        assert!(notifier.messages_for(ev.actor)[0].contains("no water"));
    }

    #[test]
    fn air_click_passes_through() {
        let mut world = GridWorld::new();
        let notifier = RecordingNotifier::default();
        let ev = InteractionEvent {
            actor: ActorId::mint(),
            action: ClickAction::RightClickAir,
            target: None,
            face: None,
            actor_pos: BlockPos::new(0, 1, 0),
        };
        assert!(!on_use(ev, &ToolsConfig::default(), &mut world, &notifier));
    }
}
