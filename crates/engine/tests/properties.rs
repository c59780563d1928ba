//! Property tests for the bounded traversals and the cooldown clock.

use proptest::prelude::*;
use std::sync::Arc;

use relictools_core::{blocks, is_water, ActorId, BlockPos, Clock};
use relictools_engine::{flood_fill, CooldownTracker, Neighborhood};
use relictools_testkit::{FakeClock, GridWorld};

proptest! {
    #[test]
    fn flood_fill_never_exceeds_its_cap(
        cells in prop::collection::hash_set((0i32..12, 0i32..3, 0i32..12), 1..150),
        cap in 0usize..64,
        diagonals in any::<bool>(),
    ) {
        let mut world = GridWorld::new();
        let mut seed = None;
        for &(x, y, z) in &cells {
            let pos = BlockPos::new(x, y, z);
            world.set(pos, blocks::WATER);
            seed.get_or_insert(pos);
        }
        let neighborhood = if diagonals {
            Neighborhood::WithPlanarDiagonals
        } else {
            Neighborhood::Axis
        };
        let found = flood_fill(&world, seed.unwrap(), is_water, cap, neighborhood);

        prop_assert!(found.len() <= cap);
        prop_assert!(found.len() <= cells.len());
        // Every returned cell matches the predicate, no duplicates.
        let unique: std::collections::HashSet<_> = found.iter().copied().collect();
        prop_assert_eq!(unique.len(), found.len());
        for pos in found {
            prop_assert!(is_water(world.get(pos)));
        }
    }

    #[test]
    fn cooldown_remaining_never_exceeds_what_was_set(
        secs in 1u64..3_600,
        elapsed_ms in 0u64..4_000_000,
    ) {
        let clock = Arc::new(FakeClock::at(0));
        let tracker = CooldownTracker::new(clock.clone() as Arc<dyn Clock>);
        let actor = ActorId::mint();
        tracker.set(actor, "use", secs);

        clock.advance_ms(elapsed_ms);
        let remaining = tracker.remaining_secs(actor, "use");
        prop_assert!(remaining <= secs);
        if elapsed_ms >= secs * 1_000 {
            prop_assert_eq!(remaining, 0);
            prop_assert!(!tracker.has(actor, "use"));
        } else {
            prop_assert_eq!(remaining, (secs * 1_000 - elapsed_ms) / 1_000);
            prop_assert!(tracker.has(actor, "use"));
        }
    }
}
