//! The engine façade the host server talks to.
//!
//! One explicitly constructed `ToolService` owns the registry, cooldown
//! tracker, scheduler, and config handle. The host translates its events
//! into the types in [`crate::events`] and calls in; nothing here
//! registers global state.

use rand::thread_rng;
use std::sync::Arc;
use tracing::info;

use relictools_core::{
    ActorId, ActorRoster, BlockAccess, Clock, ContainerAccess, DropSink, Economy, ItemStack,
    Kinetics, Notifier, ToolError, ToolId, ToolKind,
};

use crate::behaviors::{bucket, chopper, pickaxe, rocket, sell_axe, torch};
use crate::clock::SystemClock;
use crate::config::{ConfigHandle, ToolsConfig};
use crate::cooldown::CooldownTracker;
use crate::events::{BlockBreak, ClickAction, InteractionEvent};
use crate::messages;
use crate::ownership;
use crate::registry::ToolRegistry;
use crate::scheduler::ExpirationScheduler;

pub struct ToolService {
    config: ConfigHandle,
    registry: ToolRegistry,
    cooldowns: CooldownTracker,
    scheduler: ExpirationScheduler,
}

impl ToolService {
    pub fn new(config: ToolsConfig, clock: Arc<dyn Clock>) -> Self {
        let config = ConfigHandle::new(config);
        Self {
            registry: ToolRegistry::new(config.clone(), clock.clone()),
            cooldowns: CooldownTracker::new(clock),
            scheduler: ExpirationScheduler::new(),
            config,
        }
    }

    /// Production wiring: config from disk, wall clock.
    pub fn with_system_clock() -> Self {
        Self::new(ToolsConfig::load(), Arc::new(SystemClock))
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn cooldowns(&self) -> &CooldownTracker {
        &self.cooldowns
    }

    pub fn config(&self) -> &ConfigHandle {
        &self.config
    }

    /// Issue a new tool of `kind` to an online actor. Returns the item
    /// that went into their inventory.
    pub fn give(
        &self,
        actor: ActorId,
        kind: ToolKind,
        roster: &mut dyn ActorRoster,
        notifier: &dyn Notifier,
    ) -> Result<ItemStack, ToolError> {
        if !self.config.get().is_enabled(kind) {
            return Err(ToolError::NotEnabled(kind));
        }
        if !roster.is_online(actor) {
            return Err(ToolError::NotFound);
        }
        let inventory = roster.inventory_mut(actor).ok_or(ToolError::NotFound)?;
        if inventory.first_empty().is_none() {
            return Err(ToolError::NoInventorySpace);
        }

        let (tool, item) = self.registry.create(kind);
        self.registry.assign_owner(&item, actor);
        inventory.insert(item.clone());
        notifier.send(actor, &messages::tool_received(&item.display_name));
        info!(id = %tool.id, kind = kind.config_key(), "issued tool");
        Ok(item)
    }

    /// Admin destroy by identity string.
    pub fn destroy_by_identity(
        &self,
        raw: &str,
        roster: &mut dyn ActorRoster,
        notifier: &dyn Notifier,
    ) -> Result<(), ToolError> {
        let id: ToolId = raw.parse()?;
        if self.registry.lookup(id).is_none() {
            return Err(ToolError::NotFound);
        }
        self.registry.destroy(id, roster, notifier);
        Ok(())
    }

    /// Re-read the configuration file and swap it in.
    pub fn reload_configuration(&self) {
        self.config.replace(ToolsConfig::load());
        info!("configuration reloaded");
    }

    /// 1 Hz maintenance: expiry scan plus cooldown sweep. Returns the
    /// number of tools destroyed.
    pub fn tick(&self, roster: &mut dyn ActorRoster, notifier: &dyn Notifier) -> usize {
        self.cooldowns.sweep();
        self.scheduler.tick(&self.registry, roster, notifier)
    }

    /// An actor broke a block while holding `item`. Returns true when
    /// the engine absorbed the break.
    pub fn on_block_break<W>(
        &self,
        event: BlockBreak,
        item: &ItemStack,
        world: &mut W,
        sink: &mut dyn DropSink,
        economy: &dyn Economy,
        notifier: &dyn Notifier,
    ) -> bool
    where
        W: BlockAccess + ContainerAccess,
    {
        let Some(kind) = self.registry.kind_of(item) else {
            return false;
        };
        if !self.enabled_or_notify(kind, event.actor, notifier) {
            return true;
        }
        let config = self.config.get();
        let mut rng = thread_rng();
        match kind {
            ToolKind::TreeChopper => {
                chopper::on_break(event, item, world, sink, notifier, &mut rng)
            }
            ToolKind::SellAxe => sell_axe::on_break(event, world, economy, notifier),
            ToolKind::Pickaxe => {
                pickaxe::on_break(event, item, &config, world, sink, notifier, &mut rng)
            }
            _ => false,
        }
    }

    /// An actor clicked while holding `item`. Returns true when the
    /// engine absorbed the click.
    pub fn on_interaction(
        &self,
        event: InteractionEvent,
        item: &ItemStack,
        world: &mut dyn BlockAccess,
        kinetics: &mut dyn Kinetics,
        notifier: &dyn Notifier,
    ) -> bool {
        let Some(kind) = self.registry.kind_of(item) else {
            return false;
        };
        if event.action == ClickAction::LeftClickBlock {
            return false;
        }
        if !self.enabled_or_notify(kind, event.actor, notifier) {
            return true;
        }
        let config = self.config.get();
        match kind {
            ToolKind::Bucket => bucket::on_use(event, &config, world, notifier),
            ToolKind::Torch => {
                torch::on_use(event, &config, &self.cooldowns, world, notifier)
            }
            ToolKind::Rocket => {
                rocket::on_use(event.actor, &config, &self.cooldowns, kinetics, notifier)
            }
            _ => false,
        }
    }

    /// A tracked item surfaced in someone's possession (join, pickup,
    /// inventory move): re-own it and refresh its text.
    pub fn on_item_observed(&self, item: &mut ItemStack, holder: ActorId) {
        ownership::observe(&self.registry, &self.config, item, holder);
    }

    /// The host is about to despawn a dropped item; true means keep it.
    pub fn on_item_despawn(&self, item: &ItemStack) -> bool {
        ownership::suppress_despawn(&self.registry, item)
    }

    /// An actor disconnected; their cooldowns go with them.
    pub fn on_actor_quit(&self, actor: ActorId) {
        self.cooldowns.clear_all(actor);
    }

    fn enabled_or_notify(&self, kind: ToolKind, actor: ActorId, notifier: &dyn Notifier) -> bool {
        if self.config.get().is_enabled(kind) {
            return true;
        }
        notifier.send(actor, &messages::error_notice(&ToolError::NotEnabled(kind)));
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relictools_core::{blocks, BlockPos, Inventory};
    use relictools_testkit::{
        CollectingSink, FakeClock, FakeKinetics, FlatPriceEconomy, GridWorld, RecordingNotifier,
        TestRoster,
    };

    fn service() -> (Arc<FakeClock>, ToolService) {
        let clock = Arc::new(FakeClock::at(0));
        let service = ToolService::new(ToolsConfig::default(), clock.clone() as Arc<dyn Clock>);
        (clock, service)
    }

    #[test]
    fn give_issues_an_owned_tool_into_the_inventory() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let actor = roster.join(Inventory::with_slots(9));
        let notifier = RecordingNotifier::default();

        let issued = service
            .give(actor, ToolKind::Bucket, &mut roster, &notifier)
            .expect("issued");
        let id = service.registry().identity_of(&issued).expect("identity");
        let tool = service.registry().lookup(id).expect("registered");
        assert_eq!(tool.owner, Some(actor));

        let inv = roster.inventory(actor).expect("online");
        let (_, item) = inv.occupied().next().expect("item issued");
        assert_eq!(service.registry().identity_of(item), Some(id));
        assert!(notifier.messages_for(actor)[0].contains("Relic Bucket"));
    }

    #[test]
    fn give_refuses_disabled_kinds_and_full_inventories() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let actor = roster.join(Inventory::with_slots(1));
        let notifier = RecordingNotifier::default();

        let mut cfg = service.config().get();
        cfg.tools.get_mut("torch").expect("entry").enabled = false;
        service.config().replace(cfg);
        assert_eq!(
            service.give(actor, ToolKind::Torch, &mut roster, &notifier),
            Err(ToolError::NotEnabled(ToolKind::Torch))
        );

        service
            .give(actor, ToolKind::Bucket, &mut roster, &notifier)
            .expect("one slot free");
        assert_eq!(
            service.give(actor, ToolKind::Bucket, &mut roster, &notifier),
            Err(ToolError::NoInventorySpace)
        );
    }

    #[test]
    fn give_requires_an_online_actor() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let notifier = RecordingNotifier::default();
        assert_eq!(
            service.give(ActorId::mint(), ToolKind::Rocket, &mut roster, &notifier),
            Err(ToolError::NotFound)
        );
    }

    #[test]
    fn destroy_by_identity_validates_its_input() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let actor = roster.join(Inventory::with_slots(9));
        let notifier = RecordingNotifier::default();

        assert!(matches!(
            service.destroy_by_identity("not-a-uuid", &mut roster, &notifier),
            Err(ToolError::MalformedIdentity(_))
        ));
        let ghost = ToolId::mint().to_string();
        assert_eq!(
            service.destroy_by_identity(&ghost, &mut roster, &notifier),
            Err(ToolError::NotFound)
        );

        let issued = service
            .give(actor, ToolKind::Pickaxe, &mut roster, &notifier)
            .expect("issued");
        let id = service.registry().identity_of(&issued).expect("identity");
        service
            .destroy_by_identity(&id.to_string(), &mut roster, &notifier)
            .expect("destroyed");
        assert!(service.registry().lookup(id).is_none());
        assert!(roster.inventory(actor).expect("online").is_empty());
    }

    #[test]
    fn break_dispatches_by_the_held_item() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let actor = roster.join(Inventory::with_slots(9));
        let notifier = RecordingNotifier::default();
        let item = service
            .give(actor, ToolKind::TreeChopper, &mut roster, &notifier)
            .expect("issued");

        let mut world = GridWorld::new();
        world.set(BlockPos::new(0, 0, 0), blocks::OAK_LOG);
        let mut sink = CollectingSink::default();
        let economy = FlatPriceEconomy::new(1.0);
        let event = BlockBreak {
            actor,
            pos: BlockPos::new(0, 0, 0),
            actor_pos: BlockPos::new(1, 0, 0),
        };

        assert!(service.on_block_break(event, &item, &mut world, &mut sink, &economy, &notifier));
        assert_eq!(world.get(BlockPos::new(0, 0, 0)), blocks::AIR);
    }

    #[test]
    fn untracked_items_never_dispatch() {
        let (_clock, service) = service();
        let notifier = RecordingNotifier::default();
        let item = ItemStack::new(relictools_core::ItemMaterial::NetheriteAxe);
        let mut world = GridWorld::new();
        world.set(BlockPos::new(0, 0, 0), blocks::OAK_LOG);
        let mut sink = CollectingSink::default();
        let economy = FlatPriceEconomy::new(1.0);
        let event = BlockBreak {
            actor: ActorId::mint(),
            pos: BlockPos::new(0, 0, 0),
            actor_pos: BlockPos::new(0, 0, 0),
        };
        assert!(!service.on_block_break(event, &item, &mut world, &mut sink, &economy, &notifier));
        assert_eq!(world.get(BlockPos::new(0, 0, 0)), blocks::OAK_LOG);
    }

    #[test]
    fn disabled_kind_use_is_absorbed_with_a_notice() {
        let (_clock, service) = service();
        let mut roster = TestRoster::default();
        let actor = roster.join(Inventory::with_slots(9));
        let notifier = RecordingNotifier::default();
        let item = service
            .give(actor, ToolKind::Bucket, &mut roster, &notifier)
            .expect("issued");

        let mut cfg = service.config().get();
        cfg.tools.get_mut("bucket").expect("entry").enabled = false;
        service.config().replace(cfg);

        let mut world = GridWorld::new();
        world.set(BlockPos::new(0, 0, 0), blocks::WATER);
        let mut kinetics = FakeKinetics::default();
        let event = InteractionEvent {
            actor,
            action: ClickAction::RightClickBlock,
            target: Some(BlockPos::new(0, 0, 0)),
            face: None,
            actor_pos: BlockPos::new(0, 1, 0),
        };

        assert!(service.on_interaction(event, &item, &mut world, &mut kinetics, &notifier));
        assert_eq!(world.get(BlockPos::new(0, 0, 0)), blocks::WATER);
        assert!(notifier
            .messages_for(actor)
            .last()
            .expect("notice")
            .contains("disabled"));
    }

    #[test]
    fn quit_clears_cooldowns() {
        let (_clock, service) = service();
        let actor = ActorId::mint();
        service.cooldowns().set(actor, "torch", 60);
        assert!(service.cooldowns().has(actor, "torch"));
        service.on_actor_quit(actor);
        assert!(!service.cooldowns().has(actor, "torch"));
    }
}
