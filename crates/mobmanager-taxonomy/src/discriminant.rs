//! Subtype discriminants: the per-base-kind enums that refine a base kind
//! into an extended kind, and the `KindData` sum that carries them.

/// Horse coat color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorseColor {
    White,
    Creamy,
    Chestnut,
    Brown,
    Black,
    Gray,
    DarkBrown,
}

impl HorseColor {
    pub const ALL: &'static [HorseColor] = &[
        HorseColor::White,
        HorseColor::Creamy,
        HorseColor::Chestnut,
        HorseColor::Brown,
        HorseColor::Black,
        HorseColor::Gray,
        HorseColor::DarkBrown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HorseColor::White => "WHITE",
            HorseColor::Creamy => "CREAMY",
            HorseColor::Chestnut => "CHESTNUT",
            HorseColor::Brown => "BROWN",
            HorseColor::Black => "BLACK",
            HorseColor::Gray => "GRAY",
            HorseColor::DarkBrown => "DARK_BROWN",
        }
    }
}

/// Horse coat markings. The host's `NONE` style is modelled as the absent
/// slot (`Option<HorseStyle>::None`) and elided from canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorseStyle {
    White,
    Whitefield,
    WhiteDots,
    BlackDots,
}

impl HorseStyle {
    pub const ALL: &'static [HorseStyle] = &[
        HorseStyle::White,
        HorseStyle::Whitefield,
        HorseStyle::WhiteDots,
        HorseStyle::BlackDots,
    ];

    /// The full style slot domain as iterated during registry construction
    /// and rolled by the spawn finalizer: the elided `NONE` first, then the
    /// named styles in host order.
    pub const SLOTS: &'static [Option<HorseStyle>] = &[
        None,
        Some(HorseStyle::White),
        Some(HorseStyle::Whitefield),
        Some(HorseStyle::WhiteDots),
        Some(HorseStyle::BlackDots),
    ];

    pub fn name(self) -> &'static str {
        match self {
            HorseStyle::White => "WHITE",
            HorseStyle::Whitefield => "WHITEFIELD",
            HorseStyle::WhiteDots => "WHITE_DOTS",
            HorseStyle::BlackDots => "BLACK_DOTS",
        }
    }
}

/// Llama coat color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlamaColor {
    Creamy,
    White,
    Brown,
    Gray,
}

impl LlamaColor {
    pub const ALL: &'static [LlamaColor] = &[
        LlamaColor::Creamy,
        LlamaColor::White,
        LlamaColor::Brown,
        LlamaColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LlamaColor::Creamy => "CREAMY",
            LlamaColor::White => "WHITE",
            LlamaColor::Brown => "BROWN",
            LlamaColor::Gray => "GRAY",
        }
    }
}

/// Ocelot cat type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatType {
    WildOcelot,
    BlackCat,
    RedCat,
    SiameseCat,
}

impl CatType {
    pub const ALL: &'static [CatType] = &[
        CatType::WildOcelot,
        CatType::BlackCat,
        CatType::RedCat,
        CatType::SiameseCat,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CatType::WildOcelot => "WILD_OCELOT",
            CatType::BlackCat => "BLACK_CAT",
            CatType::RedCat => "RED_CAT",
            CatType::SiameseCat => "SIAMESE_CAT",
        }
    }
}

/// Parrot plumage variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParrotVariant {
    Red,
    Blue,
    Green,
    Cyan,
    Gray,
}

impl ParrotVariant {
    pub const ALL: &'static [ParrotVariant] = &[
        ParrotVariant::Red,
        ParrotVariant::Blue,
        ParrotVariant::Green,
        ParrotVariant::Cyan,
        ParrotVariant::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ParrotVariant::Red => "RED",
            ParrotVariant::Blue => "BLUE",
            ParrotVariant::Green => "GREEN",
            ParrotVariant::Cyan => "CYAN",
            ParrotVariant::Gray => "GRAY",
        }
    }
}

/// Rabbit fur type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RabbitType {
    Brown,
    White,
    Black,
    BlackAndWhite,
    Gold,
    SaltAndPepper,
    TheKillerBunny,
}

impl RabbitType {
    pub const ALL: &'static [RabbitType] = &[
        RabbitType::Brown,
        RabbitType::White,
        RabbitType::Black,
        RabbitType::BlackAndWhite,
        RabbitType::Gold,
        RabbitType::SaltAndPepper,
        RabbitType::TheKillerBunny,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RabbitType::Brown => "BROWN",
            RabbitType::White => "WHITE",
            RabbitType::Black => "BLACK",
            RabbitType::BlackAndWhite => "BLACK_AND_WHITE",
            RabbitType::Gold => "GOLD",
            RabbitType::SaltAndPepper => "SALT_AND_PEPPER",
            RabbitType::TheKillerBunny => "THE_KILLER_BUNNY",
        }
    }
}

/// Villager profession. `Normal` and `Husk` exist on the host but are never
/// registered as sub-kinds and never rolled by the spawn finalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profession {
    Normal,
    Farmer,
    Librarian,
    Priest,
    Blacksmith,
    Butcher,
    Nitwit,
    Husk,
}

impl Profession {
    /// Professions that appear in the registry and the spawn pool.
    pub const SPAWNABLE: &'static [Profession] = &[
        Profession::Farmer,
        Profession::Librarian,
        Profession::Priest,
        Profession::Blacksmith,
        Profession::Butcher,
        Profession::Nitwit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Profession::Normal => "NORMAL",
            Profession::Farmer => "FARMER",
            Profession::Librarian => "LIBRARIAN",
            Profession::Priest => "PRIEST",
            Profession::Blacksmith => "BLACKSMITH",
            Profession::Butcher => "BUTCHER",
            Profession::Nitwit => "NITWIT",
            Profession::Husk => "HUSK",
        }
    }
}

/// The discriminant payload of an extended kind.
///
/// One variant per base kind that has a discriminant schema, carrying
/// exactly that schema's fields; `None` for every other base kind. Deriving
/// `Hash`/`Eq` lets classification be a structural map lookup instead of a
/// string round-trip; the rendered string stays the wire format for config
/// and user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindData {
    None,
    Horse {
        color: HorseColor,
        style: Option<HorseStyle>,
    },
    Llama(LlamaColor),
    Ocelot(CatType),
    Parrot(ParrotVariant),
    Rabbit(RabbitType),
    Villager(Profession),
}

impl KindData {
    /// The `_`-joined uppercase suffix this data contributes to a canonical
    /// name. Empty for `None` data; an elided horse style renders only the
    /// color.
    pub fn suffix(&self) -> String {
        match self {
            KindData::None => String::new(),
            KindData::Horse { color, style } => match style {
                Some(style) => format!("{}_{}", color.name(), style.name()),
                None => color.name().to_string(),
            },
            KindData::Llama(color) => color.name().to_string(),
            KindData::Ocelot(cat) => cat.name().to_string(),
            KindData::Parrot(variant) => variant.name().to_string(),
            KindData::Rabbit(rabbit) => rabbit.name().to_string(),
            KindData::Villager(profession) => profession.name().to_string(),
        }
    }
}
