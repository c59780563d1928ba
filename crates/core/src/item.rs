//! Physical item stacks and inventories.
//!
//! Items carry a free-form string metadata map. The registry embeds the
//! kind tag, creation timestamp, and identity there, which makes the item
//! itself the durable truth about a tool; the registry is only a derived
//! index over it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::block::BlockId;
use crate::kind::ItemMaterial;
use crate::modifier::{Modifier, ModifierKind};

/// Metadata keys the engine reserves on tracked tools.
pub mod meta_keys {
    /// Kind tag. Presence of this key alone marks an item as tracked.
    pub const KIND: &str = "relic:kind";
    /// Creation wall-clock timestamp, integer milliseconds.
    pub const CREATED_MS: &str = "relic:created_ms";
    /// String form of the tool identity.
    pub const ID: &str = "relic:id";
}

/// A stack of items in an inventory slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: ItemMaterial,
    pub count: u32,
    /// Display name shown to players.
    pub display_name: String,
    /// Description lines under the name.
    pub description: Vec<String>,
    /// Enchantment-equivalent modifiers.
    pub modifiers: Vec<Modifier>,
    /// Issued tools never wear out.
    pub unbreakable: bool,
    metadata: BTreeMap<String, String>,
}

impl ItemStack {
    /// A bare item of `material` with no metadata.
    pub fn new(material: ItemMaterial) -> Self {
        Self {
            material,
            count: 1,
            display_name: String::new(),
            description: Vec::new(),
            modifiers: Vec::new(),
            unbreakable: false,
            metadata: BTreeMap::new(),
        }
    }

    /// Read a metadata field.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Write a metadata field.
    pub fn set_meta(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata.insert(key.into(), value.into());
    }

    /// Whether a metadata field is present.
    pub fn has_meta(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    /// Level of a modifier, 0 when absent.
    pub fn modifier_level(&self, kind: ModifierKind) -> u8 {
        self.modifiers
            .iter()
            .find(|m| m.kind == kind)
            .map(|m| m.level)
            .unwrap_or(0)
    }

    /// Whether the item carries a modifier of `kind` at any level.
    pub fn has_modifier(&self, kind: ModifierKind) -> bool {
        self.modifier_level(kind) > 0
    }
}

/// A quantity of harvested block drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropStack {
    pub block: BlockId,
    pub count: u32,
}

impl DropStack {
    pub fn new(block: BlockId, count: u32) -> Self {
        Self { block, count }
    }
}

/// A fixed-size slot inventory, the shape the engine sees a player's
/// possessions through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Option<ItemStack>>,
}

impl Inventory {
    /// An inventory with `size` empty slots.
    pub fn with_slots(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Index of the first empty slot.
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Insert into the first empty slot. Returns false when full.
    pub fn insert(&mut self, item: ItemStack) -> bool {
        match self.first_empty() {
            Some(slot) => {
                self.slots[slot] = Some(item);
                true
            }
            None => false,
        }
    }

    /// Take the stack out of a slot.
    pub fn take(&mut self, slot: usize) -> Option<ItemStack> {
        self.slots.get_mut(slot).and_then(Option::take)
    }

    /// Borrow a slot's contents.
    pub fn slot(&self, slot: usize) -> Option<&ItemStack> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Iterate occupied slots as `(index, item)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &ItemStack)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|item| (i, item)))
    }

    /// Iterate occupied slots mutably.
    pub fn occupied_mut(&mut self) -> impl Iterator<Item = (usize, &mut ItemStack)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, s)| s.as_mut().map(|item| (i, item)))
    }

    /// Drain every stack out of the inventory, leaving it empty.
    pub fn drain_all(&mut self) -> Vec<ItemStack> {
        self.slots.iter_mut().filter_map(Option::take).collect()
    }
}
