//! Host abstraction: the slice of the host's world and limiter surface the
//! cull engine needs. Decoupled from any concrete server API so the engine
//! can be driven by in-memory fakes in tests.

use mobmanager_taxonomy::{BaseKind, KindData, KindId};

/// Opaque host handle for a live entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

/// Point-in-time view of a live entity: everything classification and the
/// selection rule consume. Built by the host-side world glue.
#[derive(Debug, Clone)]
pub struct LivingSnapshot {
    pub id: EntityId,
    pub base: BaseKind,
    pub data: KindData,
    /// Metadata tags other plugins attached to the entity.
    pub tags: Vec<String>,
}

impl LivingSnapshot {
    pub fn new(id: EntityId, base: BaseKind, data: KindData) -> Self {
        Self {
            id,
            base,
            data,
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A world managed by the limiter.
pub trait ManagedWorld {
    fn name(&self) -> &str;

    /// Snapshot of the world's living entities. A snapshot (rather than a
    /// live iterator) keeps removal during iteration safe.
    fn living_entities(&self) -> Vec<LivingSnapshot>;

    /// Ask the host to remove an entity. Returns `false` when the host
    /// refuses (entity already gone, protected, ...).
    fn remove_entity(&mut self, id: EntityId) -> bool;
}

/// Per-(world, kind) population bookkeeping owned by the limiter.
pub trait PopulationCounter {
    fn decrement(&mut self, world: &str, kind: KindId, entity: &LivingSnapshot);
}
