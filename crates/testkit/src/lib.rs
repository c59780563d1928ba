//! Deterministic test doubles for the engine's ports.
//!
//! Everything here depends on `relictools-core` only, so both the engine
//! and the demo binary can use it without cycles.

use anyhow::Context;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use relictools_core::{
    ActorId, BlockAccess, BlockId, BlockPos, Clock, ContainerAccess, DropSink, DropStack,
    Economy, Inventory, ItemStack, Kinetics, Notifier, Vec3,
};

/// Manually advanced clock.
#[derive(Debug, Default)]
pub struct FakeClock {
    now_ms: AtomicU64,
}

impl FakeClock {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.now_ms.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: u64) {
        self.advance_ms(secs * 1_000);
    }

    pub fn set_ms(&self, now_ms: u64) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }

    pub fn set_secs(&self, secs: u64) {
        self.set_ms(secs * 1_000);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now_ms.load(Ordering::SeqCst)
    }
}

/// Sparse in-memory world; unset cells are air.
#[derive(Debug, Clone, Default)]
pub struct GridWorld {
    cells: HashMap<BlockPos, BlockId>,
    containers: HashMap<BlockPos, Inventory>,
}

impl GridWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, pos: BlockPos, id: BlockId) {
        if id == relictools_core::blocks::AIR {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, id);
        }
    }

    pub fn get(&self, pos: BlockPos) -> BlockId {
        self.cells.get(&pos).copied().unwrap_or(0)
    }

    /// Attach a container inventory to a cell.
    pub fn place_container(&mut self, pos: BlockPos, inventory: Inventory) {
        self.containers.insert(pos, inventory);
    }
}

impl BlockAccess for GridWorld {
    fn block_at(&self, pos: BlockPos) -> BlockId {
        self.get(pos)
    }

    fn set_block(&mut self, pos: BlockPos, id: BlockId) {
        self.set(pos, id);
    }
}

impl ContainerAccess for GridWorld {
    fn container_mut(&mut self, pos: BlockPos) -> Option<&mut Inventory> {
        self.containers.get_mut(&pos)
    }
}

/// Captures every notice per actor.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(ActorId, String)>>,
}

impl RecordingNotifier {
    pub fn messages_for(&self, actor: ActorId) -> Vec<String> {
        self.sent
            .lock()
            .expect("notifier lock")
            .iter()
            .filter(|(to, _)| *to == actor)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn all(&self) -> Vec<(ActorId, String)> {
        self.sent.lock().expect("notifier lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, actor: ActorId, message: &str) {
        self.sent
            .lock()
            .expect("notifier lock")
            .push((actor, message.to_string()));
    }
}

/// In-memory roster; joined actors are online until they leave.
#[derive(Debug, Default)]
pub struct TestRoster {
    online: HashSet<ActorId>,
    inventories: HashMap<ActorId, Inventory>,
}

impl TestRoster {
    /// Bring a new actor online with the given inventory.
    pub fn join(&mut self, inventory: Inventory) -> ActorId {
        let actor = ActorId::mint();
        self.online.insert(actor);
        self.inventories.insert(actor, inventory);
        actor
    }

    pub fn leave(&mut self, actor: ActorId) {
        self.online.remove(&actor);
    }

    pub fn rejoin(&mut self, actor: ActorId) {
        if self.inventories.contains_key(&actor) {
            self.online.insert(actor);
        }
    }
}

impl relictools_core::ActorRoster for TestRoster {
    fn is_online(&self, actor: ActorId) -> bool {
        self.online.contains(&actor)
    }

    fn inventory(&self, actor: ActorId) -> Option<&Inventory> {
        if !self.online.contains(&actor) {
            return None;
        }
        self.inventories.get(&actor)
    }

    fn inventory_mut(&mut self, actor: ActorId) -> Option<&mut Inventory> {
        if !self.online.contains(&actor) {
            return None;
        }
        self.inventories.get_mut(&actor)
    }
}

/// Economy stub: every item unit is worth the same flat price.
#[derive(Debug)]
pub struct FlatPriceEconomy {
    price_per_unit: f64,
    available: bool,
    refuse_deposits: bool,
    balances: Mutex<HashMap<ActorId, f64>>,
}

impl FlatPriceEconomy {
    pub fn new(price_per_unit: f64) -> Self {
        Self {
            price_per_unit,
            available: true,
            refuse_deposits: false,
            balances: Mutex::new(HashMap::new()),
        }
    }

    /// A backend that is not wired up at all.
    pub fn offline() -> Self {
        let mut economy = Self::new(0.0);
        economy.available = false;
        economy
    }

    /// A live backend that bounces every deposit.
    pub fn refusing_deposits(mut self) -> Self {
        self.refuse_deposits = true;
        self
    }

    pub fn balance(&self, actor: ActorId) -> f64 {
        self.balances
            .lock()
            .expect("economy lock")
            .get(&actor)
            .copied()
            .unwrap_or(0.0)
    }
}

impl Economy for FlatPriceEconomy {
    fn available(&self) -> bool {
        self.available
    }

    fn appraise(&self, items: &[ItemStack]) -> f64 {
        let units: u32 = items.iter().map(|item| item.count).sum();
        f64::from(units) * self.price_per_unit
    }

    fn deposit(&self, actor: ActorId, amount: f64) -> bool {
        if self.refuse_deposits {
            return false;
        }
        *self
            .balances
            .lock()
            .expect("economy lock")
            .entry(actor)
            .or_default() += amount;
        true
    }
}

/// Gathers dropped stacks with where they landed.
#[derive(Debug, Default)]
pub struct CollectingSink {
    deliveries: Vec<(BlockPos, Vec<DropStack>)>,
}

impl CollectingSink {
    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    pub fn deliveries(&self) -> &[(BlockPos, Vec<DropStack>)] {
        &self.deliveries
    }

    /// The single delivery a test expects.
    pub fn only_delivery(&self) -> (BlockPos, Vec<DropStack>) {
        assert_eq!(self.deliveries.len(), 1, "expected exactly one delivery");
        self.deliveries[0].clone()
    }
}

impl DropSink for CollectingSink {
    fn drop_items(&mut self, at: BlockPos, drops: &[DropStack]) {
        self.deliveries.push((at, drops.to_vec()));
    }
}

/// Scriptable actor movement state.
#[derive(Debug, Default)]
pub struct FakeKinetics {
    gliding: HashSet<ActorId>,
    looks: HashMap<ActorId, Vec3>,
    velocities: HashMap<ActorId, Vec3>,
}

impl FakeKinetics {
    pub fn set_gliding(&mut self, actor: ActorId, gliding: bool) {
        if gliding {
            self.gliding.insert(actor);
        } else {
            self.gliding.remove(&actor);
        }
    }

    pub fn set_look(&mut self, actor: ActorId, direction: Vec3) {
        self.looks.insert(actor, direction);
    }
}

impl Kinetics for FakeKinetics {
    fn is_gliding(&self, actor: ActorId) -> bool {
        self.gliding.contains(&actor)
    }

    fn velocity(&self, actor: ActorId) -> Vec3 {
        self.velocities.get(&actor).copied().unwrap_or_default()
    }

    fn look_direction(&self, actor: ActorId) -> Vec3 {
        self.looks.get(&actor).copied().unwrap_or_default()
    }

    fn set_velocity(&mut self, actor: ActorId, velocity: Vec3) {
        self.velocities.insert(actor, velocity);
    }
}

/// One notifier line, as written to a session transcript.
#[derive(Debug, Clone, Serialize)]
pub struct NoticeRecord {
    pub actor: String,
    pub message: String,
}

/// Dump a notifier transcript as JSON lines, one notice per line.
pub fn write_notice_jsonl(path: &Path, notices: &[(ActorId, String)]) -> anyhow::Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for (actor, message) in notices {
        let record = NoticeRecord {
            actor: actor.to_string(),
            message: message.clone(),
        };
        serde_json::to_writer(&mut file, &record)?;
        file.write_all(b"\n")?;
    }
    Ok(())
}
