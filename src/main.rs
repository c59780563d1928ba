//! relictools - headless demonstration of the tool lifecycle engine
//!
//! Builds an in-memory world, issues one of each tool to a demo player,
//! exercises every behavior, then fast-forwards the clock through the
//! expiry warnings. Run with RUST_LOG=debug for per-use detail.

use anyhow::Result;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

use relictools_core::{
    blocks, ActorId, ActorRoster, BlockAccess, BlockId, BlockPos, Clock, ContainerAccess,
    DropSink, DropStack, Economy, Face, Inventory, ItemStack, Kinetics, Notifier, Vec3,
};
use relictools_engine::{BlockBreak, ClickAction, InteractionEvent, ToolService, ToolsConfig};

/// Manually steered clock so the demo can jump to the warning windows.
struct DemoClock(AtomicU64);

impl DemoClock {
    fn set_secs(&self, secs: u64) {
        self.0.store(secs * 1_000, Ordering::SeqCst);
    }
}

impl Clock for DemoClock {
    fn now_ms(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sparse voxel world; unset cells are air.
#[derive(Default)]
struct DemoWorld {
    cells: HashMap<BlockPos, BlockId>,
    containers: HashMap<BlockPos, Inventory>,
}

impl DemoWorld {
    fn set(&mut self, pos: BlockPos, id: BlockId) {
        self.cells.insert(pos, id);
    }
}

impl BlockAccess for DemoWorld {
    fn block_at(&self, pos: BlockPos) -> BlockId {
        self.cells.get(&pos).copied().unwrap_or(blocks::AIR)
    }

    fn set_block(&mut self, pos: BlockPos, id: BlockId) {
        if id == blocks::AIR {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, id);
        }
    }
}

impl ContainerAccess for DemoWorld {
    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut Inventory> {
        self.containers.get_mut(&pos)
    }
}

/// Single demo player.
struct SoloRoster {
    actor: ActorId,
    inventory: Inventory,
}

impl ActorRoster for SoloRoster {
    fn is_online(&self, actor: ActorId) -> bool {
        actor == self.actor
    }

    fn inventory(&self, actor: ActorId) -> Option<&Inventory> {
        (actor == self.actor).then_some(&self.inventory)
    }

    fn inventory_mut(&mut self, actor: ActorId) -> Option<&mut Inventory> {
        (actor == self.actor).then_some(&mut self.inventory)
    }
}

/// Chat goes to the log.
struct ChatLog;

impl Notifier for ChatLog {
    fn send(&self, actor: ActorId, message: &str) {
        info!(%actor, "{message}");
    }
}

/// Drops go to the log too.
#[derive(Default)]
struct LoggingSink;

impl DropSink for LoggingSink {
    fn drop_items(&mut self, at: BlockPos, drops: &[DropStack]) {
        for drop in drops {
            info!(?at, block = drop.block, count = drop.count, "dropped");
        }
    }
}

/// Everything sells for one coin per unit.
struct CoinEconomy;

impl Economy for CoinEconomy {
    fn available(&self) -> bool {
        true
    }

    fn appraise(&self, items: &[ItemStack]) -> f64 {
        items.iter().map(|item| f64::from(item.count)).sum()
    }

    fn deposit(&self, actor: ActorId, amount: f64) -> bool {
        info!(%actor, amount, "credited");
        true
    }
}

/// The demo player glides the whole time.
#[derive(Default)]
struct GlidingKinetics {
    velocity: Vec3,
}

impl Kinetics for GlidingKinetics {
    fn is_gliding(&self, _actor: ActorId) -> bool {
        true
    }

    fn velocity(&self, _actor: ActorId) -> Vec3 {
        self.velocity
    }

    fn look_direction(&self, _actor: ActorId) -> Vec3 {
        Vec3::new(0.0, 0.2, 1.0)
    }

    fn set_velocity(&mut self, _actor: ActorId, velocity: Vec3) {
        self.velocity = velocity;
    }
}

fn build_world() -> DemoWorld {
    let mut world = DemoWorld::default();
    // Ground plane.
    for x in -8..=8 {
        for z in -8..=8 {
            world.set(BlockPos::new(x, 0, z), blocks::GRASS);
        }
    }
    // An oak tree.
    for y in 1..=5 {
        world.set(BlockPos::new(0, y, 0), blocks::OAK_LOG);
    }
    for (dx, dz) in [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1)] {
        world.set(BlockPos::new(dx, 5, dz), blocks::OAK_LEAVES);
    }
    world.set(BlockPos::new(0, 6, 0), blocks::OAK_LEAVES);
    // A pond.
    for x in 4..=7 {
        for z in 4..=7 {
            world.set(BlockPos::new(x, 1, z), blocks::WATER);
        }
    }
    // A stone pocket with an ore seam.
    for dx in -1..=1 {
        for dy in -1..=1 {
            for dz in -1..=1 {
                world.set(BlockPos::new(-5 + dx, 3 + dy, dz), blocks::STONE);
            }
        }
    }
    world.set(BlockPos::new(-5, 3, 0), blocks::DIAMOND_ORE);
    // A loaded chest.
    world.set(BlockPos::new(3, 1, -3), blocks::CHEST);
    let mut chest = Inventory::with_slots(27);
    for _ in 0..5 {
        let mut stack = ItemStack::new(relictools_core::ItemMaterial::Torch);
        stack.count = 16;
        chest.insert(stack);
    }
    world.containers.insert(BlockPos::new(3, 1, -3), chest);
    world
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting relictools demo v{}", env!("CARGO_PKG_VERSION"));

    let clock = Arc::new(DemoClock(AtomicU64::new(0)));
    let config = ToolsConfig::load();
    let lifetime_secs = config.lifetime_ms() / 1_000;
    let service = ToolService::new(config, clock.clone() as Arc<dyn Clock>);

    let mut world = build_world();
    let mut roster = SoloRoster {
        actor: ActorId::mint(),
        inventory: Inventory::with_slots(9),
    };
    let actor = roster.actor;
    let chat = ChatLog;
    let mut sink = LoggingSink;
    let mut kinetics = GlidingKinetics::default();
    let economy = CoinEconomy;

    use relictools_core::ToolKind::*;
    let chopper = service.give(actor, TreeChopper, &mut roster, &chat)?;
    let sell_axe = service.give(actor, SellAxe, &mut roster, &chat)?;
    let pickaxe = service.give(actor, Pickaxe, &mut roster, &chat)?;
    let bucket = service.give(actor, Bucket, &mut roster, &chat)?;
    let torch = service.give(actor, Torch, &mut roster, &chat)?;
    let rocket = service.give(actor, Rocket, &mut roster, &chat)?;

    // Fell the tree.
    let break_at = |pos| BlockBreak {
        actor,
        pos,
        actor_pos: BlockPos::new(2, 1, 0),
    };
    service.on_block_break(
        break_at(BlockPos::new(0, 1, 0)),
        &chopper,
        &mut world,
        &mut sink,
        &economy,
        &chat,
    );

    // Sell the chest.
    service.on_block_break(
        break_at(BlockPos::new(3, 1, -3)),
        &sell_axe,
        &mut world,
        &mut sink,
        &economy,
        &chat,
    );

    // Excavate the stone pocket.
    service.on_block_break(
        break_at(BlockPos::new(-5, 3, 0)),
        &pickaxe,
        &mut world,
        &mut sink,
        &economy,
        &chat,
    );

    // Drain the pond.
    let click = |target, face| InteractionEvent {
        actor,
        action: ClickAction::RightClickBlock,
        target: Some(target),
        face,
        actor_pos: BlockPos::new(2, 1, 0),
    };
    service.on_interaction(
        click(BlockPos::new(5, 1, 5), None),
        &bucket,
        &mut world,
        &mut kinetics,
        &chat,
    );

    // Place a torch, then trip the cooldown.
    for _ in 0..2 {
        service.on_interaction(
            click(BlockPos::new(2, 0, 2), Some(Face::Up)),
            &torch,
            &mut world,
            &mut kinetics,
            &chat,
        );
    }

    // Rocket boost mid-glide.
    service.on_interaction(
        InteractionEvent {
            actor,
            action: ClickAction::RightClickAir,
            target: None,
            face: None,
            actor_pos: BlockPos::new(2, 10, 0),
        },
        &rocket,
        &mut world,
        &mut kinetics,
        &chat,
    );

    // Fast-forward through the warning windows to expiry.
    info!(live = service.registry().len(), "jumping to the warning windows");
    for remaining in [3_600, 600, 60, 0] {
        clock.set_secs(lifetime_secs - remaining);
        let destroyed = service.tick(&mut roster, &chat);
        if destroyed > 0 {
            info!(destroyed, "tools expired");
        }
    }

    info!(
        live = service.registry().len(),
        slots_left = roster.inventory.occupied().count(),
        "demo complete"
    );
    Ok(())
}
