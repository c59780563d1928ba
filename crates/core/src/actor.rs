//! Actor references.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable reference to a player (or other acting entity) on the server.
///
/// The engine never dereferences this itself; it is handed back to the
/// host through the roster and notifier ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(Uuid);

impl ActorId {
    /// Mint a fresh actor id (used by hosts and tests when a player
    /// first connects).
    pub fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
