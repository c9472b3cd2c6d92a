//! Card registry - name lookup for card definitions.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::catalog;
use super::definition::{CardType, CharacterDef, SkillDef, UpgraderDef};
use crate::core::ConfigError;

/// Serialized form of a set of card definitions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSet {
    #[serde(default)]
    pub upgraders: Vec<UpgraderDef>,
    #[serde(default)]
    pub skills: Vec<SkillDef>,
    #[serde(default)]
    pub characters: Vec<CharacterDef>,
}

/// Registry of all card definitions, keyed by name.
///
/// Names are unique across the three card families.
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    upgraders: FxHashMap<String, Arc<UpgraderDef>>,
    skills: FxHashMap<String, Arc<SkillDef>>,
    characters: FxHashMap<String, Arc<CharacterDef>>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the standard catalog.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for def in catalog::upgraders() {
            registry.upgraders.insert(def.name.clone(), Arc::new(def));
        }
        for def in catalog::skills() {
            registry.skills.insert(def.name.clone(), Arc::new(def));
        }
        for def in catalog::characters() {
            registry.characters.insert(def.name.clone(), Arc::new(def));
        }
        registry
    }

    /// Load and validate a registry from a JSON [`CardSet`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let set: CardSet = serde_json::from_str(json)?;
        Self::from_card_set(set)
    }

    /// Validate and register every card in `set`.
    pub fn from_card_set(set: CardSet) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for def in set.upgraders {
            registry.register_upgrader(def)?;
        }
        for def in set.skills {
            registry.register_skill(def)?;
        }
        for def in set.characters {
            registry.register_character(def)?;
        }
        Ok(registry)
    }

    /// Export every card, each family sorted by name.
    #[must_use]
    pub fn to_card_set(&self) -> CardSet {
        fn sorted<D: Clone>(map: &FxHashMap<String, Arc<D>>) -> Vec<D> {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            entries.into_iter().map(|(_, def)| (**def).clone()).collect()
        }
        CardSet {
            upgraders: sorted(&self.upgraders),
            skills: sorted(&self.skills),
            characters: sorted(&self.characters),
        }
    }

    /// Serialize the registry as a JSON [`CardSet`].
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.to_card_set())?)
    }

    /// Register an upgrader.
    pub fn register_upgrader(&mut self, def: UpgraderDef) -> Result<(), ConfigError> {
        self.ensure_unique(&def.name)?;
        validate_upgrader(&def)?;
        self.upgraders.insert(def.name.clone(), Arc::new(def));
        Ok(())
    }

    /// Register a skill.
    pub fn register_skill(&mut self, def: SkillDef) -> Result<(), ConfigError> {
        self.ensure_unique(&def.name)?;
        validate_skill(&def)?;
        self.skills.insert(def.name.clone(), Arc::new(def));
        Ok(())
    }

    /// Register a character.
    pub fn register_character(&mut self, def: CharacterDef) -> Result<(), ConfigError> {
        self.ensure_unique(&def.name)?;
        validate_character(&def)?;
        self.characters.insert(def.name.clone(), Arc::new(def));
        Ok(())
    }

    /// Look up an upgrader by name.
    pub fn upgrader(&self, name: &str) -> Result<Arc<UpgraderDef>, ConfigError> {
        self.upgraders
            .get(name)
            .cloned()
            .ok_or_else(|| unknown(CardType::Upgrader, name))
    }

    /// Look up a skill by name.
    pub fn skill(&self, name: &str) -> Result<Arc<SkillDef>, ConfigError> {
        self.skills
            .get(name)
            .cloned()
            .ok_or_else(|| unknown(CardType::Skill, name))
    }

    /// Look up a character by name.
    pub fn character(&self, name: &str) -> Result<Arc<CharacterDef>, ConfigError> {
        self.characters
            .get(name)
            .cloned()
            .ok_or_else(|| unknown(CardType::Character, name))
    }

    /// Whether any card is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.upgraders.contains_key(name)
            || self.skills.contains_key(name)
            || self.characters.contains_key(name)
    }

    /// Total number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.upgraders.len() + self.skills.len() + self.characters.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Skills offered in the shop, sorted by name.
    #[must_use]
    pub fn shop_pool(&self) -> Vec<Arc<SkillDef>> {
        let mut pool: Vec<_> = self
            .skills
            .values()
            .filter(|def| !def.unlisted)
            .cloned()
            .collect();
        pool.sort_by(|a, b| a.name.cmp(&b.name));
        pool
    }

    fn ensure_unique(&self, name: &str) -> Result<(), ConfigError> {
        if self.contains(name) {
            return Err(ConfigError::DuplicateCard {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}

fn unknown(card_type: CardType, name: &str) -> ConfigError {
    ConfigError::UnknownCard {
        card_type,
        name: name.to_string(),
    }
}

/// Reject upgraders that cannot change the ore value.
pub fn validate_upgrader(def: &UpgraderDef) -> Result<(), ConfigError> {
    if def.change.is_identity() && def.grants.is_none() {
        return Err(ConfigError::DegenerateUpgrader {
            name: def.name.clone(),
        });
    }
    Ok(())
}

/// Reject skills whose kind or stack threshold contradicts their effect.
pub fn validate_skill(def: &SkillDef) -> Result<(), ConfigError> {
    let expected = def.effect.kind();
    if def.kind != expected {
        return Err(ConfigError::KindMismatch {
            name: def.name.clone(),
            effect: def.effect,
            declared: def.kind,
            expected,
        });
    }
    if def.effect.uses_max_stacks() && def.max_stacks == 0 {
        return Err(ConfigError::ZeroMaxStacks {
            name: def.name.clone(),
        });
    }
    Ok(())
}

/// Reject characters with a zero charge threshold.
pub fn validate_character(def: &CharacterDef) -> Result<(), ConfigError> {
    use super::definition::CharacterEffect;

    if def.effect == CharacterEffect::Mechanic && def.max_stacks == 0 {
        return Err(ConfigError::ZeroMaxStacks {
            name: def.name.clone(),
        });
    }
    Ok(())
}
