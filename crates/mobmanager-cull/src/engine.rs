//! The butcher operation: walk every managed world, select removable
//! entities against a filter, and remove them in lockstep with the
//! population counters.

use std::collections::HashSet;

use tracing::{debug, warn};

use mobmanager_taxonomy::{KindId, MobType, Taxonomy};

use crate::filter::Filter;
use crate::world::{LivingSnapshot, ManagedWorld, PopulationCounter};

/// The plugin-ecosystem convention for entities owned by an unrelated
/// collaborator: a metadata tag named `NPC`.
pub fn externally_owned(entity: &LivingSnapshot) -> bool {
    entity.has_tag("NPC")
}

/// Remove every entity matching `filter` from the managed worlds and return
/// the number removed.
///
/// Selection per entity: a category match honors `exclusions` unless the
/// filter is in bulk mode; an explicit kind match never honors them.
/// Externally-owned entities are always skipped. For each selected entity
/// the counter decrement strictly precedes the removal request; a removal
/// the host refuses is logged and not counted.
pub fn cull(
    taxonomy: &Taxonomy,
    filter: &Filter,
    worlds: &mut [&mut dyn ManagedWorld],
    counters: &mut dyn PopulationCounter,
    exclusions: &HashSet<KindId>,
    external_owned: &dyn Fn(&LivingSnapshot) -> bool,
) -> u32 {
    let mut removed = 0;

    for world in worlds {
        removed += cull_world(taxonomy, filter, &mut **world, counters, exclusions, external_owned);
    }

    removed
}

/// A single world's butcher pass; returns the number removed from that
/// world only.
pub fn cull_world(
    taxonomy: &Taxonomy,
    filter: &Filter,
    world: &mut dyn ManagedWorld,
    counters: &mut dyn PopulationCounter,
    exclusions: &HashSet<KindId>,
    external_owned: &dyn Fn(&LivingSnapshot) -> bool,
) -> u32 {
    let mut removed = 0;

    for entity in world.living_entities() {
        if external_owned(&entity) {
            continue;
        }

        let specific = taxonomy.classify(entity.base, entity.data);
        let coarse = MobType::of(entity.base);

        let category_hit = coarse.is_some_and(|c| filter.matches_category(c))
            && (filter.bulk() || !exclusions.contains(&specific.id()));

        if category_hit || filter.matches_kind(specific.id()) {
            counters.decrement(world.name(), specific.id(), &entity);

            if world.remove_entity(entity.id) {
                removed += 1;
            } else {
                warn!(
                    world = world.name(),
                    kind = specific.name(),
                    entity = entity.id.0,
                    "host refused to remove entity"
                );
            }
        }
    }

    debug!(world = world.name(), removed, "butcher pass finished");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{resolve_selector, Selector};
    use crate::world::EntityId;
    use mobmanager_taxonomy::{BaseKind, KindData, Profession};

    struct TestWorld {
        name: String,
        entities: Vec<LivingSnapshot>,
        refuse: HashSet<EntityId>,
    }

    impl TestWorld {
        fn new(name: &str, entities: Vec<LivingSnapshot>) -> Self {
            Self {
                name: name.into(),
                entities,
                refuse: HashSet::new(),
            }
        }

        fn names(&self, taxonomy: &Taxonomy) -> Vec<String> {
            self.entities
                .iter()
                .map(|e| taxonomy.classify(e.base, e.data).name().to_string())
                .collect()
        }
    }

    impl ManagedWorld for TestWorld {
        fn name(&self) -> &str {
            &self.name
        }

        fn living_entities(&self) -> Vec<LivingSnapshot> {
            self.entities.clone()
        }

        fn remove_entity(&mut self, id: EntityId) -> bool {
            if self.refuse.contains(&id) {
                return false;
            }
            let before = self.entities.len();
            self.entities.retain(|e| e.id != id);
            self.entities.len() < before
        }
    }

    #[derive(Default)]
    struct TestCounter {
        decrements: Vec<(String, KindId)>,
    }

    impl PopulationCounter for TestCounter {
        fn decrement(&mut self, world: &str, kind: KindId, _entity: &LivingSnapshot) {
            self.decrements.push((world.into(), kind));
        }
    }

    fn snapshot(id: u64, base: BaseKind) -> LivingSnapshot {
        LivingSnapshot::new(EntityId(id), base, KindData::None)
    }

    fn default_world() -> TestWorld {
        TestWorld::new(
            "W1",
            vec![
                snapshot(1, BaseKind::Zombie),
                snapshot(2, BaseKind::Cow),
                snapshot(3, BaseKind::Squid),
                snapshot(4, BaseKind::Bat),
                LivingSnapshot::new(
                    EntityId(5),
                    BaseKind::Villager,
                    KindData::Villager(Profession::Farmer),
                ),
                snapshot(6, BaseKind::ArmorStand),
            ],
        )
    }

    #[test]
    fn default_butcher_removes_monsters_ambients_water_animals() {
        let t = Taxonomy::new();
        let mut world = default_world();
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(false),
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );

        assert_eq!(removed, 3);
        assert_eq!(world.names(&t), ["COW", "VILLAGER_FARMER", "UNKNOWN"]);
        assert_eq!(counter.decrements.len(), 3);
        assert_eq!(counter.decrements[0].0, "W1");
        assert_eq!(counter.decrements[0].1, t.by_name("ZOMBIE").id());
    }

    #[test]
    fn bulk_butcher_adds_animals_but_not_villagers() {
        let t = Taxonomy::new();
        let mut world = default_world();
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(true),
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );

        assert_eq!(removed, 4);
        assert_eq!(world.names(&t), ["VILLAGER_FARMER", "UNKNOWN"]);
    }

    #[test]
    fn explicit_kind_bypasses_exclusion() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        let mut world = TestWorld::new(
            "W1",
            vec![snapshot(1, BaseKind::Zombie), snapshot(2, BaseKind::Creeper)],
        );
        let mut counter = TestCounter::default();
        let exclusions: HashSet<_> = [creeper].into();

        let filter = Filter::new(vec![Selector::Kind(creeper)], false);
        let removed = cull(
            &t,
            &filter,
            &mut [&mut world],
            &mut counter,
            &exclusions,
            &externally_owned,
        );

        assert_eq!(removed, 1);
        assert_eq!(world.names(&t), ["ZOMBIE"]);
    }

    #[test]
    fn category_selection_honors_exclusion() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        let mut world = TestWorld::new(
            "W1",
            vec![snapshot(1, BaseKind::Zombie), snapshot(2, BaseKind::Creeper)],
        );
        let mut counter = TestCounter::default();
        let exclusions: HashSet<_> = [creeper].into();

        let filter = resolve_selector(&t, "monster")
            .map(|s| Filter::new(vec![s], false))
            .unwrap();
        let removed = cull(
            &t,
            &filter,
            &mut [&mut world],
            &mut counter,
            &exclusions,
            &externally_owned,
        );

        assert_eq!(removed, 1);
        assert_eq!(world.names(&t), ["CREEPER"]);
    }

    #[test]
    fn bulk_mode_suppresses_exclusions_for_categories() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        let mut world = TestWorld::new("W1", vec![snapshot(2, BaseKind::Creeper)]);
        let mut counter = TestCounter::default();
        let exclusions: HashSet<_> = [creeper].into();

        let removed = cull(
            &t,
            &Filter::default_set(true),
            &mut [&mut world],
            &mut counter,
            &exclusions,
            &externally_owned,
        );

        assert_eq!(removed, 1);
        assert!(world.entities.is_empty());
    }

    #[test]
    fn npc_tagged_entities_are_never_removed() {
        let t = Taxonomy::new();
        let mut world = TestWorld::new(
            "W1",
            vec![
                snapshot(1, BaseKind::Zombie),
                snapshot(2, BaseKind::Zombie).with_tag("NPC"),
            ],
        );
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(true),
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );

        assert_eq!(removed, 1);
        assert_eq!(world.entities.len(), 1);
        assert!(world.entities[0].has_tag("NPC"));
        // no decrement for the skipped entity either
        assert_eq!(counter.decrements.len(), 1);
    }

    #[test]
    fn refused_removal_is_not_counted_but_decrement_happened() {
        let t = Taxonomy::new();
        let mut world = TestWorld::new(
            "W1",
            vec![snapshot(1, BaseKind::Zombie), snapshot(2, BaseKind::Zombie)],
        );
        world.refuse.insert(EntityId(2));
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(false),
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );

        assert_eq!(removed, 1);
        // decrement precedes removal, so the refused entity was still counted
        // down; resync is the reconciliation path's job
        assert_eq!(counter.decrements.len(), 2);
    }

    #[test]
    fn worlds_are_processed_in_provider_order() {
        let t = Taxonomy::new();
        let mut w1 = TestWorld::new("alpha", vec![snapshot(1, BaseKind::Zombie)]);
        let mut w2 = TestWorld::new("beta", vec![snapshot(2, BaseKind::Blaze)]);
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(false),
            &mut [&mut w1, &mut w2],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );

        assert_eq!(removed, 2);
        let worlds: Vec<_> = counter.decrements.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(worlds, ["alpha", "beta"]);
    }

    #[test]
    fn world_pass_reports_its_own_delta() {
        let t = Taxonomy::new();
        let mut w1 = TestWorld::new(
            "alpha",
            vec![snapshot(1, BaseKind::Zombie), snapshot(2, BaseKind::Blaze)],
        );
        let mut w2 = TestWorld::new("beta", vec![snapshot(3, BaseKind::Ghast)]);
        let mut counter = TestCounter::default();
        let filter = Filter::default_set(false);
        let none = HashSet::new();

        assert_eq!(
            cull_world(&t, &filter, &mut w1, &mut counter, &none, &externally_owned),
            2
        );
        // the second world's pass starts from zero, not from the running total
        assert_eq!(
            cull_world(&t, &filter, &mut w2, &mut counter, &none, &externally_owned),
            1
        );
    }

    #[test]
    fn bulk_removes_superset_of_non_bulk() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        let exclusions: HashSet<_> = [creeper].into();
        let entities = vec![
            snapshot(1, BaseKind::Zombie),
            snapshot(2, BaseKind::Creeper),
            snapshot(3, BaseKind::Cow),
            snapshot(4, BaseKind::Bat),
        ];

        let survivors = |bulk: bool| {
            let mut world = TestWorld::new("W1", entities.clone());
            let mut counter = TestCounter::default();
            cull(
                &t,
                &Filter::default_set(bulk),
                &mut [&mut world],
                &mut counter,
                &exclusions,
                &externally_owned,
            );
            world
                .entities
                .iter()
                .map(|e| e.id)
                .collect::<HashSet<_>>()
        };

        let plain = survivors(false);
        let bulk = survivors(true);
        assert!(bulk.is_subset(&plain));
    }

    #[test]
    fn unknown_entities_need_an_explicit_selector() {
        let t = Taxonomy::new();
        let mut world = TestWorld::new("W1", vec![snapshot(1, BaseKind::ArmorStand)]);
        let mut counter = TestCounter::default();

        let removed = cull(
            &t,
            &Filter::default_set(true),
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );
        assert_eq!(removed, 0);

        let filter = Filter::new(vec![Selector::Kind(t.unknown().id())], false);
        let removed = cull(
            &t,
            &filter,
            &mut [&mut world],
            &mut counter,
            &HashSet::new(),
            &externally_owned,
        );
        assert_eq!(removed, 1);
    }
}
