//! Base entity kinds and coarse mob categories.
//!
//! `BaseKind` mirrors the host's alive-entity enumeration in host
//! declaration order; that order drives the registry's root insertion and is
//! part of the observable contract.

/// A value of the host's native alive-entity enumeration.
///
/// `Player` and `ArmorStand` are representable (a live entity can report
/// them) but are never registered as cullable kinds. `Unknown` is the
/// sentinel for entities the host reports that we have no name for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKind {
    ElderGuardian,
    WitherSkeleton,
    Stray,
    Husk,
    ZombieVillager,
    SkeletonHorse,
    ZombieHorse,
    ArmorStand,
    Donkey,
    Mule,
    Evoker,
    Vex,
    Vindicator,
    Illusioner,
    Creeper,
    Skeleton,
    Spider,
    Giant,
    Zombie,
    Slime,
    Ghast,
    PigZombie,
    Enderman,
    CaveSpider,
    Silverfish,
    Blaze,
    MagmaCube,
    EnderDragon,
    Wither,
    Bat,
    Witch,
    Endermite,
    Guardian,
    Shulker,
    Pig,
    Sheep,
    Cow,
    Chicken,
    Squid,
    Wolf,
    MushroomCow,
    Snowman,
    Ocelot,
    IronGolem,
    Horse,
    Rabbit,
    PolarBear,
    Llama,
    Parrot,
    Villager,
    Player,
    Unknown,
}

impl BaseKind {
    /// Every alive base kind in host declaration order, including `Player`
    /// and `ArmorStand` (filtered out during registry construction).
    pub const ALIVE: &'static [BaseKind] = &[
        BaseKind::ElderGuardian,
        BaseKind::WitherSkeleton,
        BaseKind::Stray,
        BaseKind::Husk,
        BaseKind::ZombieVillager,
        BaseKind::SkeletonHorse,
        BaseKind::ZombieHorse,
        BaseKind::ArmorStand,
        BaseKind::Donkey,
        BaseKind::Mule,
        BaseKind::Evoker,
        BaseKind::Vex,
        BaseKind::Vindicator,
        BaseKind::Illusioner,
        BaseKind::Creeper,
        BaseKind::Skeleton,
        BaseKind::Spider,
        BaseKind::Giant,
        BaseKind::Zombie,
        BaseKind::Slime,
        BaseKind::Ghast,
        BaseKind::PigZombie,
        BaseKind::Enderman,
        BaseKind::CaveSpider,
        BaseKind::Silverfish,
        BaseKind::Blaze,
        BaseKind::MagmaCube,
        BaseKind::EnderDragon,
        BaseKind::Wither,
        BaseKind::Bat,
        BaseKind::Witch,
        BaseKind::Endermite,
        BaseKind::Guardian,
        BaseKind::Shulker,
        BaseKind::Pig,
        BaseKind::Sheep,
        BaseKind::Cow,
        BaseKind::Chicken,
        BaseKind::Squid,
        BaseKind::Wolf,
        BaseKind::MushroomCow,
        BaseKind::Snowman,
        BaseKind::Ocelot,
        BaseKind::IronGolem,
        BaseKind::Horse,
        BaseKind::Rabbit,
        BaseKind::PolarBear,
        BaseKind::Llama,
        BaseKind::Parrot,
        BaseKind::Villager,
        BaseKind::Player,
    ];

    /// The host's uppercase name for this kind, e.g. `"PIG_ZOMBIE"`.
    pub fn name(self) -> &'static str {
        match self {
            BaseKind::ElderGuardian => "ELDER_GUARDIAN",
            BaseKind::WitherSkeleton => "WITHER_SKELETON",
            BaseKind::Stray => "STRAY",
            BaseKind::Husk => "HUSK",
            BaseKind::ZombieVillager => "ZOMBIE_VILLAGER",
            BaseKind::SkeletonHorse => "SKELETON_HORSE",
            BaseKind::ZombieHorse => "ZOMBIE_HORSE",
            BaseKind::ArmorStand => "ARMOR_STAND",
            BaseKind::Donkey => "DONKEY",
            BaseKind::Mule => "MULE",
            BaseKind::Evoker => "EVOKER",
            BaseKind::Vex => "VEX",
            BaseKind::Vindicator => "VINDICATOR",
            BaseKind::Illusioner => "ILLUSIONER",
            BaseKind::Creeper => "CREEPER",
            BaseKind::Skeleton => "SKELETON",
            BaseKind::Spider => "SPIDER",
            BaseKind::Giant => "GIANT",
            BaseKind::Zombie => "ZOMBIE",
            BaseKind::Slime => "SLIME",
            BaseKind::Ghast => "GHAST",
            BaseKind::PigZombie => "PIG_ZOMBIE",
            BaseKind::Enderman => "ENDERMAN",
            BaseKind::CaveSpider => "CAVE_SPIDER",
            BaseKind::Silverfish => "SILVERFISH",
            BaseKind::Blaze => "BLAZE",
            BaseKind::MagmaCube => "MAGMA_CUBE",
            BaseKind::EnderDragon => "ENDER_DRAGON",
            BaseKind::Wither => "WITHER",
            BaseKind::Bat => "BAT",
            BaseKind::Witch => "WITCH",
            BaseKind::Endermite => "ENDERMITE",
            BaseKind::Guardian => "GUARDIAN",
            BaseKind::Shulker => "SHULKER",
            BaseKind::Pig => "PIG",
            BaseKind::Sheep => "SHEEP",
            BaseKind::Cow => "COW",
            BaseKind::Chicken => "CHICKEN",
            BaseKind::Squid => "SQUID",
            BaseKind::Wolf => "WOLF",
            BaseKind::MushroomCow => "MUSHROOM_COW",
            BaseKind::Snowman => "SNOWMAN",
            BaseKind::Ocelot => "OCELOT",
            BaseKind::IronGolem => "IRON_GOLEM",
            BaseKind::Horse => "HORSE",
            BaseKind::Rabbit => "RABBIT",
            BaseKind::PolarBear => "POLAR_BEAR",
            BaseKind::Llama => "LLAMA",
            BaseKind::Parrot => "PARROT",
            BaseKind::Villager => "VILLAGER",
            BaseKind::Player => "PLAYER",
            BaseKind::Unknown => "UNKNOWN",
        }
    }
}

/// Coarse mob category, orthogonal to the fine-grained kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MobType {
    Monster,
    Animal,
    WaterAnimal,
    Ambient,
    Villager,
}

impl MobType {
    /// The category a base kind belongs to, or `None` for kinds the limiter
    /// never categorises (golems, stands, players, unknown).
    pub fn of(base: BaseKind) -> Option<MobType> {
        use BaseKind::*;
        match base {
            ElderGuardian | WitherSkeleton | Stray | Husk | ZombieVillager | Evoker | Vex
            | Vindicator | Illusioner | Creeper | Skeleton | Spider | Giant | Zombie | Slime
            | Ghast | PigZombie | Enderman | CaveSpider | Silverfish | Blaze | MagmaCube
            | EnderDragon | Wither | Witch | Endermite | Guardian | Shulker => {
                Some(MobType::Monster)
            }
            SkeletonHorse | ZombieHorse | Donkey | Mule | Pig | Sheep | Cow | Chicken | Wolf
            | MushroomCow | Ocelot | Horse | Rabbit | PolarBear | Llama | Parrot => {
                Some(MobType::Animal)
            }
            Squid => Some(MobType::WaterAnimal),
            Bat => Some(MobType::Ambient),
            Villager => Some(MobType::Villager),
            ArmorStand | Snowman | IronGolem | Player | Unknown => None,
        }
    }
}
