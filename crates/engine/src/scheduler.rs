//! Expiry scan, driven by the host's 1 Hz tick.
//!
//! The scheduler keeps no state of its own. Each tick walks a snapshot
//! of the registry, warns holders at the fixed thresholds, and destroys
//! anything whose lifetime has run out. Warnings fire on second
//! equality, so a tool that skips a threshold between ticks simply
//! misses that warning; the destroy check uses `== 0` on a saturating
//! remainder and never misses.

use tracing::info;

use relictools_core::{ActorRoster, Notifier};

use crate::messages;
use crate::registry::ToolRegistry;

/// Warning windows in seconds remaining, with their display form.
const WARNINGS: [(u64, &str); 3] = [(3_600, "1h"), (600, "10m"), (60, "1m")];

/// Stateless 1 Hz expiry pass over the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpirationScheduler;

impl ExpirationScheduler {
    pub fn new() -> Self {
        Self
    }

    /// One scan. Returns how many tools were destroyed.
    pub fn tick(
        &self,
        registry: &ToolRegistry,
        roster: &mut dyn ActorRoster,
        notifier: &dyn Notifier,
    ) -> usize {
        let mut destroyed = 0;
        for tool in registry.all() {
            let remaining = registry.remaining_lifetime_of(&tool);
            if remaining == 0 {
                registry.destroy(tool.id, roster, notifier);
                destroyed += 1;
                continue;
            }
            if let Some(owner) = tool.owner {
                for (threshold, window) in WARNINGS {
                    if remaining == threshold && roster.is_online(owner) {
                        let name = registry.config_name(tool.kind);
                        notifier.send(owner, &messages::timer_warning(&name, window));
                    }
                }
            }
        }
        if destroyed > 0 {
            info!(destroyed, live = registry.len(), "expiry pass");
        }
        destroyed
    }
}
