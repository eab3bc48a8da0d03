//! Spawn finalization: resolving an extended kind into the concrete
//! attributes the spawn collaborator applies to a freshly spawned entity.
//!
//! The registry only supplies the plan; calling the host's spawn primitive
//! and applying the plan is the collaborator's job.

use rand::Rng;

use crate::base::BaseKind;
use crate::discriminant::{
    CatType, HorseColor, HorseStyle, KindData, LlamaColor, ParrotVariant, Profession, RabbitType,
};
use crate::registry::ExtendedKind;

/// Main-hand equipment a kind spawns with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandItem {
    Bow,
    StoneSword,
    GoldSword,
}

/// Fully resolved spawn attributes: every discriminant slot filled (an
/// elided horse style may resolve back to the host's plain `NONE` style)
/// plus the base kind's equipment policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPlan {
    pub data: KindData,
    pub hand_item: Option<HandItem>,
}

impl ExtendedKind {
    /// Resolve this kind's spawn attributes. Discriminants the kind carries
    /// are kept; empty slots are filled uniformly at random from the slot's
    /// domain (villagers draw from the spawnable professions only).
    pub fn spawn_plan<R: Rng>(&self, rng: &mut R) -> SpawnPlan {
        let data = match self.data() {
            KindData::Horse { color, style } => KindData::Horse {
                color,
                style: style.or_else(|| pick(rng, HorseStyle::SLOTS)),
            },
            KindData::None => match self.base() {
                BaseKind::Horse => KindData::Horse {
                    color: pick(rng, HorseColor::ALL),
                    style: pick(rng, HorseStyle::SLOTS),
                },
                BaseKind::Llama => KindData::Llama(pick(rng, LlamaColor::ALL)),
                BaseKind::Ocelot => KindData::Ocelot(pick(rng, CatType::ALL)),
                BaseKind::Parrot => KindData::Parrot(pick(rng, ParrotVariant::ALL)),
                BaseKind::Rabbit => KindData::Rabbit(pick(rng, RabbitType::ALL)),
                BaseKind::Villager => KindData::Villager(pick(rng, Profession::SPAWNABLE)),
                _ => KindData::None,
            },
            resolved => resolved,
        };

        let hand_item = match self.base() {
            BaseKind::Skeleton => Some(HandItem::Bow),
            BaseKind::WitherSkeleton => Some(HandItem::StoneSword),
            BaseKind::PigZombie => Some(HandItem::GoldSword),
            _ => None,
        };

        SpawnPlan { data, hand_item }
    }
}

fn pick<R: Rng, T: Copy>(rng: &mut R, domain: &[T]) -> T {
    domain[rng.gen_range(0..domain.len())]
}
