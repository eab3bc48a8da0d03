//! The extended-kind registry: a build-once catalog mapping every cullable
//! base kind (and its discriminated sub-kinds) to a dense id, a canonical
//! name, and a coarse category.
//!
//! Construction order is part of the contract: roots in host enumeration
//! order, then the sub-kinds of each discriminated base, then `UNKNOWN`.
//! Canonical names are the wire format for config files and user input.

use std::collections::HashMap;

use crate::base::{BaseKind, MobType};
use crate::discriminant::{
    CatType, HorseColor, HorseStyle, KindData, LlamaColor, ParrotVariant, Profession, RabbitType,
};

/// Dense registry index, allocated in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KindId(pub u32);

/// An entry of the taxonomy: a base kind plus zero or more discriminants.
#[derive(Debug, Clone)]
pub struct ExtendedKind {
    id: KindId,
    base: BaseKind,
    data: KindData,
    parent: Option<KindId>,
    mob_type: Option<MobType>,
    name: String,
}

impl ExtendedKind {
    pub fn id(&self) -> KindId {
        self.id
    }

    pub fn base(&self) -> BaseKind {
        self.base
    }

    pub fn data(&self) -> KindData {
        self.data
    }

    /// The root kind this sub-kind refines, or `None` for roots.
    pub fn parent(&self) -> Option<KindId> {
        self.parent
    }

    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Coarse category derived from the base kind, `None` for kinds the
    /// limiter never categorises.
    pub fn mob_type(&self) -> Option<MobType> {
        self.mob_type
    }

    /// Canonical uppercase name, e.g. `"HORSE_WHITE_WHITE_DOTS"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spawn-space hint: the entity's bounding box is wider than one block.
    pub fn is_wide(&self) -> bool {
        matches!(
            self.base,
            BaseKind::CaveSpider
                | BaseKind::EnderDragon
                | BaseKind::Ghast
                | BaseKind::Giant
                | BaseKind::Horse
                | BaseKind::IronGolem
                | BaseKind::MagmaCube
                | BaseKind::Slime
                | BaseKind::Spider
                | BaseKind::Wither
        )
    }

    /// Spawn-space hint: the entity is taller than two blocks.
    pub fn is_tall(&self) -> bool {
        matches!(
            self.base,
            BaseKind::Enderman
                | BaseKind::EnderDragon
                | BaseKind::Ghast
                | BaseKind::Giant
                | BaseKind::Horse
                | BaseKind::IronGolem
                | BaseKind::MagmaCube
                | BaseKind::Slime
                | BaseKind::Wither
        )
    }
}

/// Soft wrap width for [`Taxonomy::render_list`].
const LIST_WIDTH: usize = 68;

/// The build-once, immutable catalog of extended kinds.
pub struct Taxonomy {
    kinds: Vec<ExtendedKind>,
    by_name: HashMap<String, KindId>,
    by_data: HashMap<(BaseKind, KindData), KindId>,
    unknown: KindId,
}

impl Taxonomy {
    /// Build the full catalog: one root per alive base kind (players and
    /// armor stands excluded), then the discriminated sub-kinds of horse,
    /// llama, ocelot, parrot, rabbit and villager, then `UNKNOWN`.
    pub fn new() -> Self {
        let mut t = Taxonomy {
            kinds: Vec::new(),
            by_name: HashMap::new(),
            by_data: HashMap::new(),
            unknown: KindId(0),
        };

        for &base in BaseKind::ALIVE {
            if base == BaseKind::Player || base == BaseKind::ArmorStand {
                continue;
            }
            t.insert(base, KindData::None, None);
        }

        let horse = t.root(BaseKind::Horse);
        for &color in HorseColor::ALL {
            for &style in HorseStyle::SLOTS {
                t.insert(BaseKind::Horse, KindData::Horse { color, style }, Some(horse));
            }
        }

        let llama = t.root(BaseKind::Llama);
        for &color in LlamaColor::ALL {
            t.insert(BaseKind::Llama, KindData::Llama(color), Some(llama));
        }

        let ocelot = t.root(BaseKind::Ocelot);
        for &cat in CatType::ALL {
            t.insert(BaseKind::Ocelot, KindData::Ocelot(cat), Some(ocelot));
        }

        let parrot = t.root(BaseKind::Parrot);
        for &variant in ParrotVariant::ALL {
            t.insert(BaseKind::Parrot, KindData::Parrot(variant), Some(parrot));
        }

        let rabbit = t.root(BaseKind::Rabbit);
        for &rabbit_type in RabbitType::ALL {
            t.insert(BaseKind::Rabbit, KindData::Rabbit(rabbit_type), Some(rabbit));
        }

        let villager = t.root(BaseKind::Villager);
        for &profession in Profession::SPAWNABLE {
            t.insert(
                BaseKind::Villager,
                KindData::Villager(profession),
                Some(villager),
            );
        }

        t.unknown = t.insert(BaseKind::Unknown, KindData::None, None);
        t
    }

    fn insert(&mut self, base: BaseKind, data: KindData, parent: Option<KindId>) -> KindId {
        let id = KindId(self.kinds.len() as u32);
        let suffix = data.suffix();
        let name = if suffix.is_empty() {
            base.name().to_string()
        } else {
            format!("{}_{}", base.name(), suffix)
        };
        self.by_name.insert(name.clone(), id);
        self.by_data.insert((base, data), id);
        self.kinds.push(ExtendedKind {
            id,
            base,
            data,
            parent,
            mob_type: MobType::of(base),
            name,
        });
        id
    }

    // Roots are inserted before any sub-kind references them.
    fn root(&self, base: BaseKind) -> KindId {
        self.by_data[&(base, KindData::None)]
    }

    /// All registered kinds in insertion order: roots first, sub-kinds
    /// second, `UNKNOWN` last.
    pub fn kinds(&self) -> &[ExtendedKind] {
        &self.kinds
    }

    pub fn by_id(&self, id: KindId) -> Option<&ExtendedKind> {
        self.kinds.get(id.0 as usize)
    }

    /// Case-insensitive lookup of a canonical name. Always returns a kind:
    /// unresolved names fall back to `UNKNOWN`.
    pub fn by_name(&self, name: &str) -> &ExtendedKind {
        let id = self
            .by_name
            .get(&name.to_uppercase())
            .copied()
            .unwrap_or(self.unknown);
        &self.kinds[id.0 as usize]
    }

    pub fn by_base(&self, base: BaseKind) -> &ExtendedKind {
        self.classify(base, KindData::None)
    }

    /// Classify a live entity's reported base kind and discriminant data.
    /// Never fails: unregistered combinations (armor stands, green
    /// villagers, modded entities) come back as `UNKNOWN`.
    pub fn classify(&self, base: BaseKind, data: KindData) -> &ExtendedKind {
        let id = self
            .by_data
            .get(&(base, data))
            .copied()
            .unwrap_or(self.unknown);
        &self.kinds[id.0 as usize]
    }

    pub fn unknown(&self) -> &ExtendedKind {
        &self.kinds[self.unknown.0 as usize]
    }

    pub fn parent_of(&self, kind: &ExtendedKind) -> Option<&ExtendedKind> {
        kind.parent().and_then(|id| self.by_id(id))
    }

    /// Comma-separated listing of roots (`subtypes == false`) or sub-kinds
    /// (`subtypes == true`), soft-wrapped at 68 columns: when appending the
    /// next name would push past column 68 a `,\n` is emitted and the column
    /// resets.
    pub fn render_list(&self, subtypes: bool) -> String {
        let mut out = String::new();
        let mut col = 1usize;

        for kind in &self.kinds {
            if subtypes != kind.has_parent() {
                continue;
            }
            let name = kind.name();

            if col != 1 && col + name.len() + 1 > LIST_WIDTH {
                out.push_str(",\n");
                col = 1;
            }
            if col != 1 {
                out.push_str(", ");
                col += 2;
            }
            out.push_str(name);
            col += name.len();
        }

        out
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::new()
    }
}
