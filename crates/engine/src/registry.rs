//! Tool entities and the identity→entity registry.
//!
//! The registry is a cache, not the truth: every question about a
//! physical item (is it tracked, which kind, when was it made) is
//! answered from the item's embedded metadata, so the registry can be
//! rebuilt at any time by re-scanning items. The map exists for O(1)
//! identity lookup and for the expiry scan.

use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

use relictools_core::{
    meta_keys, ActorId, ActorRoster, Clock, ItemStack, Notifier, ToolId, ToolKind,
};

use crate::config::ConfigHandle;
use crate::messages;

/// A tracked tool entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub id: ToolId,
    pub kind: ToolKind,
    /// Creation wall-clock time, milliseconds. Set once.
    pub created_ms: u64,
    /// Last actor observed holding the backing item.
    pub owner: Option<ActorId>,
}

impl Tool {
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }
}

/// Registry of live tools; single source of truth for "is this item a
/// tracked tool", backed by item metadata.
pub struct ToolRegistry {
    tools: DashMap<ToolId, Tool>,
    config: ConfigHandle,
    clock: Arc<dyn Clock>,
}

impl ToolRegistry {
    pub fn new(config: ConfigHandle, clock: Arc<dyn Clock>) -> Self {
        Self {
            tools: DashMap::new(),
            config,
            clock,
        }
    }

    /// Manufacture a new tool of `kind`: mint an identity, embed the
    /// metadata triple, render name/description from configuration,
    /// apply the kind's modifier bundle, and index the entity.
    pub fn create(&self, kind: ToolKind) -> (Tool, ItemStack) {
        let id = ToolId::mint();
        let now = self.clock.now_ms();
        let cfg = self.config.get();

        let mut item = ItemStack::new(kind.base_material());
        item.set_meta(meta_keys::KIND, kind.config_key());
        item.set_meta(meta_keys::CREATED_MS, now.to_string());
        item.set_meta(meta_keys::ID, id.to_string());
        item.display_name = cfg.display_name(kind);
        item.description =
            messages::render_description(&cfg, kind, id, cfg.lifetime_ms() / 1_000);
        item.modifiers = kind.modifier_bundle().to_vec();
        item.unbreakable = true;

        let tool = Tool {
            id,
            kind,
            created_ms: now,
            owner: None,
        };
        self.tools.insert(id, tool.clone());
        debug!(%id, kind = kind.config_key(), "manufactured tool");
        (tool, item)
    }

    /// True iff the item carries the kind tag. Checked before any other
    /// item query.
    pub fn is_tracked_tool(&self, item: &ItemStack) -> bool {
        item.has_meta(meta_keys::KIND)
    }

    /// The item's kind. `None` when untracked or when the tag fails to
    /// parse; tag corruption must never crash a caller.
    pub fn kind_of(&self, item: &ItemStack) -> Option<ToolKind> {
        item.meta(meta_keys::KIND).and_then(ToolKind::from_config_key)
    }

    /// The item's embedded identity, if present and well-formed.
    pub fn identity_of(&self, item: &ItemStack) -> Option<ToolId> {
        item.meta(meta_keys::ID).and_then(|raw| raw.parse().ok())
    }

    /// Embedded creation timestamp in milliseconds; 0 when absent or
    /// unparseable.
    pub fn created_at_of(&self, item: &ItemStack) -> u64 {
        item.meta(meta_keys::CREATED_MS)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }

    /// Remaining lifetime of the backing item in whole seconds; 0 for
    /// anything without a readable creation timestamp.
    pub fn remaining_lifetime(&self, item: &ItemStack) -> u64 {
        match item
            .meta(meta_keys::CREATED_MS)
            .and_then(|raw| raw.parse().ok())
        {
            Some(created) => self.remaining_secs(created),
            None => 0,
        }
    }

    /// Remaining lifetime of a registered entity in whole seconds.
    pub fn remaining_lifetime_of(&self, tool: &Tool) -> u64 {
        self.remaining_secs(tool.created_ms)
    }

    fn remaining_secs(&self, created_ms: u64) -> u64 {
        // A corrupt timestamp can sit anywhere in the u64 range.
        let expires = created_ms.saturating_add(self.config.get().lifetime_ms());
        expires.saturating_sub(self.clock.now_ms()) / 1_000
    }

    /// Record `actor` as the current holder of the item's tool. A no-op
    /// for untracked items and for identities with no registry entry
    /// (the tool may have expired between observation and this call).
    pub fn assign_owner(&self, item: &ItemStack, actor: ActorId) {
        if let Some(id) = self.identity_of(item) {
            if let Some(mut tool) = self.tools.get_mut(&id) {
                tool.owner = Some(actor);
            }
        }
    }

    /// Destroy a tool: drop the registry entry unconditionally, and if
    /// the last known holder is reachable, remove exactly one matching
    /// item from their possession and tell them. Idempotent.
    pub fn destroy(&self, id: ToolId, roster: &mut dyn ActorRoster, notifier: &dyn Notifier) {
        let Some((_, tool)) = self.tools.remove(&id) else {
            return;
        };
        debug!(%id, kind = tool.kind.config_key(), "destroying tool");

        let Some(owner) = tool.owner else { return };
        if !roster.is_online(owner) {
            return;
        }
        let Some(inventory) = roster.inventory_mut(owner) else {
            return;
        };

        let slot = inventory
            .occupied()
            .find(|(_, item)| self.identity_of(item) == Some(id))
            .map(|(slot, _)| slot);
        if let Some(slot) = slot {
            inventory.take(slot);
            let name = self.config.get().display_name(tool.kind);
            notifier.send(owner, &messages::tool_destroyed(&name));
        }
    }

    /// Configured display name for a kind.
    pub fn config_name(&self, kind: ToolKind) -> String {
        self.config.get().display_name(kind)
    }

    /// Look up an entity by identity.
    pub fn lookup(&self, id: ToolId) -> Option<Tool> {
        self.tools.get(&id).map(|t| t.clone())
    }

    /// Snapshot of every live entity. Safe to destroy entries while
    /// iterating the returned vector.
    pub fn all(&self) -> Vec<Tool> {
        self.tools.iter().map(|entry| entry.value().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
