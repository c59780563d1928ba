//! Host-server events the behaviors consume.
//!
//! The host translates its own event types into these before calling the
//! service; the engine never registers callbacks with the game loop.

use relictools_core::{ActorId, BlockPos, Face};

/// What the actor did with the item in hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    LeftClickBlock,
    RightClickBlock,
    RightClickAir,
}

/// An actor used (clicked with) the item they are holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionEvent {
    pub actor: ActorId,
    pub action: ClickAction,
    /// The clicked block, absent for air clicks.
    pub target: Option<BlockPos>,
    /// The clicked face of the target, when the host reports one.
    pub face: Option<Face>,
    /// Block coordinate of the actor's feet.
    pub actor_pos: BlockPos,
}

/// An actor broke a block with the item they are holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockBreak {
    pub actor: ActorId,
    pub pos: BlockPos,
    /// Block coordinate of the actor's feet, for drop relocation.
    pub actor_pos: BlockPos,
}
