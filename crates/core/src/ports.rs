//! Ports to the host game server.
//!
//! The engine is deliberately ignorant of the real world, inventory, and
//! chat implementations; it consumes them through these traits. Test
//! doubles live in `relictools-testkit`.

use crate::actor::ActorId;
use crate::block::{BlockId, BlockPos};
use crate::item::{DropStack, Inventory, ItemStack};

/// Wall-clock source, integer milliseconds since an arbitrary epoch.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> u64;
}

/// Read/write access to the voxel world.
pub trait BlockAccess {
    fn block_at(&self, pos: BlockPos) -> BlockId;
    fn set_block(&mut self, pos: BlockPos, id: BlockId);
}

/// Access to container blocks (chests) in the world.
pub trait ContainerAccess {
    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut Inventory>;
}

/// Receives harvested drops at a world position.
pub trait DropSink {
    fn drop_items(&mut self, at: BlockPos, drops: &[DropStack]);
}

/// Sends a chat message to a specific actor. Formatting and localization
/// are the host's problem; the engine hands over plain text.
pub trait Notifier {
    fn send(&self, actor: ActorId, message: &str);
}

/// Who is currently on the server, and their inventories.
pub trait ActorRoster {
    fn is_online(&self, actor: ActorId) -> bool;
    fn inventory(&self, actor: ActorId) -> Option<&Inventory>;
    fn inventory_mut(&mut self, actor: ActorId) -> Option<&mut Inventory>;
}

/// Currency backend used by the sell axe.
pub trait Economy {
    /// Whether a backend is wired up at all.
    fn available(&self) -> bool;
    /// Total sale value of the given stacks.
    fn appraise(&self, items: &[ItemStack]) -> f64;
    /// Credit an actor. Returns false when the deposit is refused.
    fn deposit(&self, actor: ActorId, amount: f64) -> bool;
}

/// Minimal 3-vector for actor kinetics (rocket boost).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn add(self, other: Vec3) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Unit vector in the same direction; zero stays zero.
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            self
        } else {
            self.scale(1.0 / len)
        }
    }
}

/// Actor movement state the rocket behavior reads and writes.
pub trait Kinetics {
    fn is_gliding(&self, actor: ActorId) -> bool;
    fn velocity(&self, actor: ActorId) -> Vec3;
    fn look_direction(&self, actor: ActorId) -> Vec3;
    fn set_velocity(&mut self, actor: ActorId, velocity: Vec3);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec3_normalizes_and_scales() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-9);
        let unit = v.normalized();
        assert!((unit.length() - 1.0).abs() < 1e-9);
        assert_eq!(Vec3::default().normalized(), Vec3::default());
        assert_eq!(v.scale(2.0).x, 6.0);
    }
}
