//! Host glue for the mob-management plugin: limiter configuration and the
//! butcher / mobtypes command surface.
//!
//! Everything host-specific (chat delivery, permission lookups, world
//! enumeration, population counters) stays behind the traits in
//! `mobmanager-cull` and this crate; the host wires them up at load time.

pub mod command;
pub mod config;

pub use command::{ChatSink, CommandContext, MobManager, Permissions};
pub use config::{ConfigError, PluginConfig};
