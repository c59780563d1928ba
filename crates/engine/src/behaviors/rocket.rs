//! Glide rocket: a velocity kick for actors already gliding.

use relictools_core::{ActorId, Kinetics, Notifier, ToolKind};

use crate::config::ToolsConfig;
use crate::cooldown::CooldownTracker;
use crate::messages;

const COOLDOWN_KEY: &str = match ToolKind::Rocket.cooldown_key() {
    Some(key) => key,
    None => panic!("rocket is cooldown gated"),
};
/// Speed added along the look direction per use.
const BOOST: f64 = 1.5;
/// Ceiling on the resulting speed.
const MAX_SPEED: f64 = 3.0;

/// Handle a right click with the rocket in hand. Always consumes the
/// click; the rocket item is never spent.
pub fn on_use(
    actor: ActorId,
    config: &ToolsConfig,
    cooldowns: &CooldownTracker,
    kinetics: &mut dyn Kinetics,
    notifier: &dyn Notifier,
) -> bool {
    if !kinetics.is_gliding(actor) {
        notifier.send(actor, &messages::not_flying());
        return true;
    }
    if cooldowns.has(actor, COOLDOWN_KEY) {
        let remaining = cooldowns.remaining_secs(actor, COOLDOWN_KEY);
        notifier.send(actor, &messages::cooldown_wait(remaining));
        return true;
    }

    let boost = kinetics.look_direction(actor).normalized().scale(BOOST);
    let mut velocity = kinetics.velocity(actor).add(boost);
    if velocity.length() > MAX_SPEED {
        velocity = velocity.normalized().scale(MAX_SPEED);
    }
    kinetics.set_velocity(actor, velocity);
    cooldowns.set(actor, COOLDOWN_KEY, config.rocket.cooldown_secs);
    notifier.send(actor, &messages::rocket_boost());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use relictools_core::{Clock, Vec3};
    use relictools_testkit::{FakeClock, FakeKinetics, RecordingNotifier};
    use std::sync::Arc;

    fn fixture() -> (Arc<FakeClock>, CooldownTracker) {
        let clock = Arc::new(FakeClock::at(0));
        let tracker = CooldownTracker::new(clock.clone() as Arc<dyn Clock>);
        (clock, tracker)
    }

    #[test]
    fn boosts_along_the_look_direction() {
        let (_clock, cooldowns) = fixture();
        let notifier = RecordingNotifier::default();
        let actor = ActorId::mint();
        let mut kinetics = FakeKinetics::default();
        kinetics.set_gliding(actor, true);
        kinetics.set_look(actor, Vec3::new(1.0, 0.0, 0.0));

        assert!(on_use(
            actor,
            &ToolsConfig::default(),
            &cooldowns,
            &mut kinetics,
            &notifier
        ));
        assert_eq!(kinetics.velocity(actor), Vec3::new(1.5, 0.0, 0.0));
        assert!(cooldowns.has(actor, COOLDOWN_KEY));
        assert_eq!(notifier.messages_for(actor)[0], "Whoosh!");
    }

    #[test]
    fn speed_is_clamped() {
        let (clock, cooldowns) = fixture();
        let notifier = RecordingNotifier::default();
        let actor = ActorId::mint();
        let mut kinetics = FakeKinetics::default();
        kinetics.set_gliding(actor, true);
        kinetics.set_look(actor, Vec3::new(1.0, 0.0, 0.0));
        let cfg = ToolsConfig::default();

        for _ in 0..5 {
            assert!(on_use(actor, &cfg, &cooldowns, &mut kinetics, &notifier));
            clock.advance_secs(cfg.rocket.cooldown_secs);
        }
        let speed = kinetics.velocity(actor).length();
        assert!(speed <= MAX_SPEED + 1e-9, "speed {speed}");
        assert!((speed - MAX_SPEED).abs() < 1e-9);
    }

    #[test]
    fn refuses_while_grounded() {
        let (_clock, cooldowns) = fixture();
        let notifier = RecordingNotifier::default();
        let actor = ActorId::mint();
        let mut kinetics = FakeKinetics::default();

        assert!(on_use(
            actor,
            &ToolsConfig::default(),
            &cooldowns,
            &mut kinetics,
            &notifier
        ));
        assert_eq!(kinetics.velocity(actor), Vec3::default());
        assert!(!cooldowns.has(actor, COOLDOWN_KEY));
        assert!(notifier.messages_for(actor)[0].contains("gliding"));
    }

    #[test]
    fn cooldown_gates_repeat_boosts() {
        let (clock, cooldowns) = fixture();
        let notifier = RecordingNotifier::default();
        let actor = ActorId::mint();
        let mut kinetics = FakeKinetics::default();
        kinetics.set_gliding(actor, true);
        kinetics.set_look(actor, Vec3::new(0.0, 0.0, 1.0));
        let cfg = ToolsConfig::default();

        assert!(on_use(actor, &cfg, &cooldowns, &mut kinetics, &notifier));
        assert!(on_use(actor, &cfg, &cooldowns, &mut kinetics, &notifier));
        // Second use only warned; velocity unchanged.
        assert_eq!(kinetics.velocity(actor), Vec3::new(0.0, 0.0, 1.5));
        assert!(notifier.messages_for(actor)[1].contains("wait"));

        clock.advance_secs(2);
        assert!(on_use(actor, &cfg, &cooldowns, &mut kinetics, &notifier));
        assert_eq!(kinetics.velocity(actor), Vec3::new(0.0, 0.0, 3.0));
    }
}
