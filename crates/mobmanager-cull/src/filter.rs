//! Cull filters: ordered selector lists resolved from user input.

use thiserror::Error;

use mobmanager_taxonomy::{KindId, MobType, Taxonomy};

/// One user-supplied filter entry: a coarse category word or a specific
/// extended kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Category(MobType),
    Kind(KindId),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    /// The token is neither a category word nor a registered kind name.
    #[error("invalid mob type '{0}'")]
    InvalidSelector(String),
}

/// Resolve a single token: the five lowercase category words map to their
/// categories, anything else goes through the registry by name.
pub fn resolve_selector(taxonomy: &Taxonomy, token: &str) -> Result<Selector, SelectorError> {
    let selector = match token.to_lowercase().as_str() {
        "monster" => Selector::Category(MobType::Monster),
        "animal" => Selector::Category(MobType::Animal),
        "wateranimal" => Selector::Category(MobType::WaterAnimal),
        "ambient" => Selector::Category(MobType::Ambient),
        "villager" => Selector::Category(MobType::Villager),
        _ => {
            let kind = taxonomy.by_name(token);
            if kind.id() == taxonomy.unknown().id() {
                return Err(SelectorError::InvalidSelector(token.to_string()));
            }
            Selector::Kind(kind.id())
        }
    };
    Ok(selector)
}

/// An ordered selector collection plus the bulk-mode flag. Duplicates are
/// permitted and have no extra effect.
#[derive(Debug, Clone)]
pub struct Filter {
    selectors: Vec<Selector>,
    bulk: bool,
}

impl Filter {
    pub fn new(selectors: Vec<Selector>, bulk: bool) -> Self {
        Self { selectors, bulk }
    }

    /// The no-argument filter: monsters, ambients and water animals; bulk
    /// mode adds animals.
    pub fn default_set(bulk: bool) -> Self {
        let mut selectors = vec![
            Selector::Category(MobType::Monster),
            Selector::Category(MobType::Ambient),
            Selector::Category(MobType::WaterAnimal),
        ];
        if bulk {
            selectors.push(Selector::Category(MobType::Animal));
        }
        Self { selectors, bulk }
    }

    /// True for the remove-all command form, which suppresses the exclusion
    /// list for category selectors.
    pub fn bulk(&self) -> bool {
        self.bulk
    }

    pub fn matches_category(&self, category: MobType) -> bool {
        self.selectors
            .iter()
            .any(|s| *s == Selector::Category(category))
    }

    pub fn matches_kind(&self, kind: KindId) -> bool {
        self.selectors.iter().any(|s| *s == Selector::Kind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_words() {
        let t = Taxonomy::new();
        assert_eq!(
            resolve_selector(&t, "monster"),
            Ok(Selector::Category(MobType::Monster))
        );
        assert_eq!(
            resolve_selector(&t, "wateranimal"),
            Ok(Selector::Category(MobType::WaterAnimal))
        );
        assert_eq!(
            resolve_selector(&t, "villager"),
            Ok(Selector::Category(MobType::Villager))
        );
    }

    #[test]
    fn kind_names_resolve_case_insensitively() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        assert_eq!(resolve_selector(&t, "creeper"), Ok(Selector::Kind(creeper)));
        assert_eq!(resolve_selector(&t, "CREEPER"), Ok(Selector::Kind(creeper)));
    }

    #[test]
    fn invalid_token_names_the_offender() {
        let t = Taxonomy::new();
        assert_eq!(
            resolve_selector(&t, "gibberish"),
            Err(SelectorError::InvalidSelector("gibberish".into()))
        );
    }

    #[test]
    fn explicit_unknown_is_rejected() {
        // UNKNOWN is the lookup fallback, so as a token it is never a valid
        // selector.
        let t = Taxonomy::new();
        assert!(resolve_selector(&t, "UNKNOWN").is_err());
    }

    #[test]
    fn default_set_adds_animals_in_bulk_mode() {
        let plain = Filter::default_set(false);
        assert!(plain.matches_category(MobType::Monster));
        assert!(plain.matches_category(MobType::Ambient));
        assert!(plain.matches_category(MobType::WaterAnimal));
        assert!(!plain.matches_category(MobType::Animal));
        assert!(!plain.matches_category(MobType::Villager));
        assert!(!plain.bulk());

        let bulk = Filter::default_set(true);
        assert!(bulk.matches_category(MobType::Animal));
        assert!(!bulk.matches_category(MobType::Villager));
        assert!(bulk.bulk());
    }

    #[test]
    fn duplicates_are_harmless() {
        let t = Taxonomy::new();
        let creeper = t.by_name("CREEPER").id();
        let f = Filter::new(
            vec![
                Selector::Kind(creeper),
                Selector::Kind(creeper),
                Selector::Category(MobType::Monster),
                Selector::Category(MobType::Monster),
            ],
            false,
        );
        assert!(f.matches_kind(creeper));
        assert!(f.matches_category(MobType::Monster));
    }
}
