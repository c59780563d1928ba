//! Shared data model for the relictools engine.
//!
//! Everything here is engine-agnostic: tool kinds and identities, block
//! ids and predicates, item stacks with embedded metadata, modifier
//! bundles, and the ports through which the engine talks to the host
//! game server.

mod actor;
mod block;
mod error;
mod identity;
mod item;
mod kind;
mod modifier;
mod ports;
mod time_format;

pub use actor::*;
pub use block::*;
pub use error::*;
pub use identity::*;
pub use item::*;
pub use kind::*;
pub use modifier::*;
pub use ports::*;
pub use time_format::*;
