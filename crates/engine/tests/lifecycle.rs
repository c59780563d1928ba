//! End-to-end lifecycle: issue a tool, watch the warnings, lose it.

use std::sync::Arc;

use relictools_core::{ActorRoster, Clock, Inventory, ToolKind};
use relictools_engine::{ToolService, ToolsConfig};
use relictools_testkit::{write_notice_jsonl, FakeClock, RecordingNotifier, TestRoster};

const LIFETIME_SECS: u64 = 7 * 86_400;

fn service() -> (Arc<FakeClock>, ToolService) {
    let clock = Arc::new(FakeClock::at(0));
    let service = ToolService::new(ToolsConfig::default(), clock.clone() as Arc<dyn Clock>);
    (clock, service)
}

#[test]
fn issued_tool_warns_then_self_destructs() {
    let (clock, service) = service();
    let mut roster = TestRoster::default();
    let actor = roster.join(Inventory::with_slots(9));
    let notifier = RecordingNotifier::default();

    let issued = service
        .give(actor, ToolKind::Bucket, &mut roster, &notifier)
        .expect("issued");
    let id = service.registry().identity_of(&issued).expect("identity");

    // Fresh tool reads its full lifetime.
    assert_eq!(service.registry().remaining_lifetime(&issued), LIFETIME_SECS);

    // One hour out: warning, nothing destroyed.
    clock.set_secs(LIFETIME_SECS - 3_600);
    assert_eq!(service.tick(&mut roster, &notifier), 0);

    // Ten minutes, one minute.
    clock.set_secs(LIFETIME_SECS - 600);
    service.tick(&mut roster, &notifier);
    clock.set_secs(LIFETIME_SECS - 60);
    service.tick(&mut roster, &notifier);

    // Expiry.
    clock.set_secs(LIFETIME_SECS);
    assert_eq!(service.tick(&mut roster, &notifier), 1);

    let sent = notifier.messages_for(actor);
    assert_eq!(sent.len(), 5, "received + 3 warnings + destroyed: {sent:?}");
    assert!(sent[1].contains("1h"));
    assert!(sent[2].contains("10m"));
    assert!(sent[3].contains("1m"));
    assert!(sent[4].contains("self-destructed"));

    assert!(service.registry().lookup(id).is_none());
    assert!(roster.inventory(actor).expect("online").is_empty());

    // Further ticks are no-ops.
    clock.advance_secs(60);
    assert_eq!(service.tick(&mut roster, &notifier), 0);

    // The session transcript replays the same five notices.
    let path = std::env::temp_dir().join(format!("lifecycle-notices-{}.jsonl", std::process::id()));
    write_notice_jsonl(&path, &notifier.all()).expect("transcript written");
    let transcript = std::fs::read_to_string(&path).expect("transcript read");
    std::fs::remove_file(&path).expect("transcript removed");
    let lines: Vec<&str> = transcript.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains(&actor.to_string()));
    assert!(lines[4].contains("self-destructed"));
}

#[test]
fn tool_held_by_an_offline_owner_still_expires() {
    let (clock, service) = service();
    let mut roster = TestRoster::default();
    let actor = roster.join(Inventory::with_slots(9));
    let notifier = RecordingNotifier::default();

    let issued = service
        .give(actor, ToolKind::TreeChopper, &mut roster, &notifier)
        .expect("issued");
    let id = service.registry().identity_of(&issued).expect("identity");
    roster.leave(actor);

    clock.set_secs(LIFETIME_SECS + 5);
    assert_eq!(service.tick(&mut roster, &notifier), 1);
    assert!(service.registry().lookup(id).is_none());

    // The item is still in the stored inventory; the next observation
    // of it reports no remaining lifetime and no registry entry.
    roster.rejoin(actor);
    let held = roster
        .inventory(actor)
        .expect("online")
        .slot(0)
        .expect("still holding the dead item")
        .clone();
    assert_eq!(service.registry().remaining_lifetime(&held), 0);
}

#[test]
fn reissued_kind_gets_a_fresh_identity_and_timer() {
    let (clock, service) = service();
    let mut roster = TestRoster::default();
    let actor = roster.join(Inventory::with_slots(9));
    let notifier = RecordingNotifier::default();

    let first = service
        .give(actor, ToolKind::Torch, &mut roster, &notifier)
        .expect("issued");
    let first_id = service.registry().identity_of(&first).expect("identity");
    clock.set_secs(LIFETIME_SECS);
    service.tick(&mut roster, &notifier);
    assert!(service.registry().lookup(first_id).is_none());

    let second = service
        .give(actor, ToolKind::Torch, &mut roster, &notifier)
        .expect("reissued");
    let second_id = service.registry().identity_of(&second).expect("identity");
    assert_ne!(first_id, second_id);
    assert_eq!(service.registry().remaining_lifetime(&second), LIFETIME_SECS);
}

#[test]
fn observation_refreshes_the_timer_line() {
    let (clock, service) = service();
    let mut roster = TestRoster::default();
    let actor = roster.join(Inventory::with_slots(9));
    let notifier = RecordingNotifier::default();

    let mut held = service
        .give(actor, ToolKind::Pickaxe, &mut roster, &notifier)
        .expect("issued");
    assert!(held.description.iter().any(|l| l.contains("7d")));

    clock.advance_secs(3 * 86_400);
    service.on_item_observed(&mut held, actor);
    assert!(held.description.iter().any(|l| l.contains("4d")));

    // Dropped tracked items survive despawn sweeps.
    assert!(service.on_item_despawn(&held));
}
