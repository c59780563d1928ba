//! Per-actor, per-key use cooldowns.
//!
//! Expiry is lazy: a stale entry is dropped the next time it is read.
//! `sweep` exists for the periodic maintenance pass so entries for
//! actors who stopped using tools do not linger forever.

use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

use relictools_core::{ActorId, Clock};

/// Tracks "actor used key at deadline" windows.
pub struct CooldownTracker {
    entries: DashMap<ActorId, HashMap<String, u64>>,
    clock: Arc<dyn Clock>,
}

impl CooldownTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Start a cooldown of `secs` seconds on `key` for `actor`.
    pub fn set(&self, actor: ActorId, key: &str, secs: u64) {
        let deadline = self.clock.now_ms() + secs * 1_000;
        self.entries
            .entry(actor)
            .or_default()
            .insert(key.to_string(), deadline);
    }

    /// Whether the cooldown is still running. Evicts on expiry.
    pub fn has(&self, actor: ActorId, key: &str) -> bool {
        self.remaining_ms(actor, key) > 0
    }

    /// Whole seconds left, truncated. A cooldown in its final fraction
    /// of a second reads 0 here while `has` still reports it active.
    pub fn remaining_secs(&self, actor: ActorId, key: &str) -> u64 {
        self.remaining_ms(actor, key) / 1_000
    }

    fn remaining_ms(&self, actor: ActorId, key: &str) -> u64 {
        let now = self.clock.now_ms();
        let Some(mut keys) = self.entries.get_mut(&actor) else {
            return 0;
        };
        match keys.get(key) {
            Some(&deadline) if deadline > now => deadline - now,
            Some(_) => {
                keys.remove(key);
                if keys.is_empty() {
                    drop(keys);
                    self.entries.remove_if(&actor, |_, m| m.is_empty());
                }
                0
            }
            None => 0,
        }
    }

    /// Drop one cooldown for an actor.
    pub fn clear(&self, actor: ActorId, key: &str) {
        if let Some(mut keys) = self.entries.get_mut(&actor) {
            keys.remove(key);
        }
        self.entries.remove_if(&actor, |_, m| m.is_empty());
    }

    /// Drop every cooldown for an actor, e.g. on disconnect.
    pub fn clear_all(&self, actor: ActorId) {
        self.entries.remove(&actor);
    }

    /// Drop everything.
    pub fn clear_everything(&self) {
        self.entries.clear();
    }

    /// Evict every expired entry. Returns how many were dropped.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now_ms();
        let mut dropped = 0;
        for mut entry in self.entries.iter_mut() {
            let before = entry.len();
            entry.retain(|_, &mut deadline| deadline > now);
            dropped += before - entry.len();
        }
        self.entries.retain(|_, keys| !keys.is_empty());
        dropped
    }

    /// Number of actors with at least one live cooldown.
    pub fn active_count(&self) -> usize {
        self.entries.len()
    }
}
