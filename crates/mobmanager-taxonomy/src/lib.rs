//! Entity taxonomy: base kinds, coarse mob categories, subtype
//! discriminants, and the build-once extended-kind registry.
//!
//! The registry refines the host's coarse entity enumeration with subtype
//! discriminants (horse style+color, villager profession, ...) and is the
//! single source of truth for the canonical names used in config files and
//! commands. It is constructed once at plugin startup and read-only after
//! that, so it can be shared freely across the plugin.

pub mod base;
pub mod discriminant;
pub mod registry;
pub mod spawn;

pub use base::{BaseKind, MobType};
pub use discriminant::{
    CatType, HorseColor, HorseStyle, KindData, LlamaColor, ParrotVariant, Profession, RabbitType,
};
pub use registry::{ExtendedKind, KindId, Taxonomy};
pub use spawn::{HandItem, SpawnPlan};
