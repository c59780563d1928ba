//! Ownership tracking and item protection.
//!
//! Whenever the host observes a tracked item in someone's hands (join,
//! pickup, inventory move), the holder becomes the owner and the item
//! text is re-rendered so the self-destruct line shows the current
//! remaining time. Tracked items are also exempt from despawning.

use relictools_core::{ActorId, ItemStack};

use crate::config::ConfigHandle;
use crate::messages;
use crate::registry::ToolRegistry;

/// Record `holder` as the item's owner and refresh its rendered text.
/// Untracked items are left alone.
pub fn observe(
    registry: &ToolRegistry,
    config: &ConfigHandle,
    item: &mut ItemStack,
    holder: ActorId,
) {
    if !registry.is_tracked_tool(item) {
        return;
    }
    registry.assign_owner(item, holder);
    refresh_text(registry, config, item);
}

/// Re-render the display name and description from the current config
/// and remaining lifetime. Items with a corrupt kind tag keep whatever
/// text they had.
pub fn refresh_text(registry: &ToolRegistry, config: &ConfigHandle, item: &mut ItemStack) {
    let Some(kind) = registry.kind_of(item) else {
        return;
    };
    let Some(id) = registry.identity_of(item) else {
        return;
    };
    let cfg = config.get();
    let remaining = registry.remaining_lifetime(item);
    item.display_name = cfg.display_name(kind);
    item.description = messages::render_description(&cfg, kind, id, remaining);
}

/// Tracked items never despawn; the host should cancel the despawn when
/// this returns true.
pub fn suppress_despawn(registry: &ToolRegistry, item: &ItemStack) -> bool {
    registry.is_tracked_tool(item)
}
