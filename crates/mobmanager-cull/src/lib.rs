//! The cull engine: filter resolution and the butcher operation over the
//! host's managed worlds.
//!
//! The host is abstracted behind small traits ([`ManagedWorld`],
//! [`PopulationCounter`]); the engine itself is synchronous, runs on the
//! host's ticking thread, and never retains host references past a call.

pub mod engine;
pub mod filter;
pub mod world;

pub use engine::{cull, cull_world, externally_owned};
pub use filter::{resolve_selector, Filter, Selector, SelectorError};
pub use world::{EntityId, LivingSnapshot, ManagedWorld, PopulationCounter};
