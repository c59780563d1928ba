//! Tool lifecycle and area-effect engine.
//!
//! The registry owns the identity→entity map and manufactures items, the
//! scheduler drives expiry off an external 1 Hz tick, the cooldown
//! tracker gates the torch and rocket, and the search module holds the
//! flood-fill algorithms shared by the area-effect kinds. `ToolService`
//! ties it all together for the host server.

pub mod behaviors;
mod clock;
mod config;
mod cooldown;
mod drops;
mod events;
mod messages;
mod ownership;
mod registry;
mod scheduler;
mod search;
mod service;

pub use clock::*;
pub use config::*;
pub use cooldown::*;
pub use drops::*;
pub use events::*;
pub use messages::*;
pub use ownership::*;
pub use registry::*;
pub use scheduler::*;
pub use search::*;
pub use service::*;
