//! Enchantment-equivalent modifiers applied to manufactured tools.

use serde::{Deserialize, Serialize};

/// Kinds of modifier a tool item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Faster block breaking. Purely cosmetic on non-digging kinds.
    Efficiency,
    /// Slower wear. Cosmetic here since issued tools are unbreakable.
    Durability,
    /// Self-repair over time.
    AutoRepair,
    /// Probabilistic extra drops when harvesting eligible blocks.
    YieldBonus,
    /// Harvest blocks verbatim; suppresses the yield bonus entirely.
    SilkTouch,
}

/// A modifier with a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    pub kind: ModifierKind,
    pub level: u8,
}

impl Modifier {
    pub fn new(kind: ModifierKind, level: u8) -> Self {
        Self { kind, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_compare_by_kind_and_level() {
        assert_eq!(
            Modifier::new(ModifierKind::Efficiency, 5),
            Modifier::new(ModifierKind::Efficiency, 5)
        );
        assert_ne!(
            Modifier::new(ModifierKind::Efficiency, 5),
            Modifier::new(ModifierKind::Efficiency, 4)
        );
    }
}
