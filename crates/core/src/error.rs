//! Recoverable failure taxonomy for tool operations.
//!
//! Everything here is reported to the triggering actor as a message and
//! never aborts the server. Corrupt embedded metadata is not an error at
//! all: queries degrade to "absent".

use thiserror::Error;

use crate::kind::ToolKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Unknown tool identity or offline/unknown actor.
    #[error("no tracked tool with that identity")]
    NotFound,
    /// The kind is disabled by configuration.
    #[error("the {} is disabled", .0.config_key())]
    NotEnabled(ToolKind),
    /// The receiving actor's inventory has no empty slot.
    #[error("no inventory space")]
    NoInventorySpace,
    /// An identity string that does not parse.
    #[error("malformed tool identity: {0}")]
    MalformedIdentity(String),
    /// A sell interaction without a value backend available.
    #[error("no economy backend available")]
    NoEconomyBackend,
}
