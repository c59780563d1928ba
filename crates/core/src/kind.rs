//! The closed set of special tool kinds.

use serde::{Deserialize, Serialize};

use crate::modifier::{Modifier, ModifierKind};

/// Physical item material a tool is manufactured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemMaterial {
    NetheriteAxe,
    NetheritePickaxe,
    Bucket,
    Torch,
    FireworkRocket,
}

/// The six special tool kinds. Fixed at compile time; behavior, base
/// material, and modifier bundle all key off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    TreeChopper,
    SellAxe,
    Pickaxe,
    Bucket,
    Torch,
    Rocket,
}

/// Every kind, in declaration order.
pub const ALL_KINDS: [ToolKind; 6] = [
    ToolKind::TreeChopper,
    ToolKind::SellAxe,
    ToolKind::Pickaxe,
    ToolKind::Bucket,
    ToolKind::Torch,
    ToolKind::Rocket,
];

impl ToolKind {
    /// Stable configuration key (lowercase-hyphenated).
    pub fn config_key(self) -> &'static str {
        match self {
            ToolKind::TreeChopper => "tree-chopper",
            ToolKind::SellAxe => "sell-axe",
            ToolKind::Pickaxe => "pickaxe",
            ToolKind::Bucket => "bucket",
            ToolKind::Torch => "torch",
            ToolKind::Rocket => "rocket",
        }
    }

    /// Look a kind up by its configuration key.
    pub fn from_config_key(key: &str) -> Option<Self> {
        ALL_KINDS.into_iter().find(|k| k.config_key() == key)
    }

    /// Default human-readable name, used when configuration provides none.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::TreeChopper => "Relic Tree Chopper",
            ToolKind::SellAxe => "Relic Sell Axe",
            ToolKind::Pickaxe => "Relic Pickaxe",
            ToolKind::Bucket => "Relic Bucket",
            ToolKind::Torch => "Relic Torch",
            ToolKind::Rocket => "Relic Rocket",
        }
    }

    /// Material of the backing physical item.
    pub fn base_material(self) -> ItemMaterial {
        match self {
            ToolKind::TreeChopper | ToolKind::SellAxe => ItemMaterial::NetheriteAxe,
            ToolKind::Pickaxe => ItemMaterial::NetheritePickaxe,
            ToolKind::Bucket => ItemMaterial::Bucket,
            ToolKind::Torch => ItemMaterial::Torch,
            ToolKind::Rocket => ItemMaterial::FireworkRocket,
        }
    }

    /// Fixed modifier bundle applied at creation.
    pub fn modifier_bundle(self) -> &'static [Modifier] {
        const DIGGING: &[Modifier] = &[
            Modifier {
                kind: ModifierKind::Efficiency,
                level: 5,
            },
            Modifier {
                kind: ModifierKind::Durability,
                level: 3,
            },
            Modifier {
                kind: ModifierKind::AutoRepair,
                level: 1,
            },
        ];
        const MINING: &[Modifier] = &[
            Modifier {
                kind: ModifierKind::Efficiency,
                level: 5,
            },
            Modifier {
                kind: ModifierKind::Durability,
                level: 3,
            },
            Modifier {
                kind: ModifierKind::AutoRepair,
                level: 1,
            },
            Modifier {
                kind: ModifierKind::YieldBonus,
                level: 3,
            },
        ];
        // Cosmetic shimmer only.
        const UTILITY: &[Modifier] = &[Modifier {
            kind: ModifierKind::Efficiency,
            level: 10,
        }];

        match self {
            ToolKind::TreeChopper | ToolKind::SellAxe => DIGGING,
            ToolKind::Pickaxe => MINING,
            ToolKind::Bucket | ToolKind::Torch | ToolKind::Rocket => UTILITY,
        }
    }

    /// Cooldown action key for kinds gated by a per-actor cooldown.
    pub const fn cooldown_key(self) -> Option<&'static str> {
        match self {
            ToolKind::Torch => Some("torch"),
            ToolKind::Rocket => Some("rocket"),
            _ => None,
        }
    }
}
