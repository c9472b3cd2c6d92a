//! Loadouts - the ordered cards a player brings to a round.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CharacterDef, SkillDef, UpgraderDef};
use super::registry::{validate_character, validate_skill, validate_upgrader, CardRegistry};
use crate::core::ConfigError;

/// Ordered upgraders and skills plus an optional character.
///
/// Order is significant: upgraders process the ore front to back and skills
/// are consulted in list order during cascade resolution.
///
/// The `with_*` builders accept any template as given. Call
/// [`Loadout::validate`] on hand-built loadouts; loadouts resolved from a
/// [`CardRegistry`] are already validated.
#[derive(Clone, Debug, Default)]
pub struct Loadout {
    pub upgraders: Vec<Arc<UpgraderDef>>,
    pub skills: Vec<Arc<SkillDef>>,
    pub character: Option<Arc<CharacterDef>>,
}

impl Loadout {
    /// Create an empty loadout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an upgrader (builder pattern).
    #[must_use]
    pub fn with_upgrader(mut self, def: impl Into<Arc<UpgraderDef>>) -> Self {
        self.upgraders.push(def.into());
        self
    }

    /// Append a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, def: impl Into<Arc<SkillDef>>) -> Self {
        self.skills.push(def.into());
        self
    }

    /// Set the character (builder pattern).
    #[must_use]
    pub fn with_character(mut self, def: impl Into<Arc<CharacterDef>>) -> Self {
        self.character = Some(def.into());
        self
    }

    /// Check every template with the same rules the registry applies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for def in &self.upgraders {
            validate_upgrader(def)?;
        }
        for def in &self.skills {
            validate_skill(def)?;
        }
        if let Some(def) = &self.character {
            validate_character(def)?;
        }
        Ok(())
    }
}

/// Loadout described by card names, as stored in configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSpec {
    #[serde(default)]
    pub upgraders: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub character: Option<String>,
}

impl LoadoutSpec {
    /// Resolve every name against `registry`.
    pub fn resolve(&self, registry: &CardRegistry) -> Result<Loadout, ConfigError> {
        let upgraders = self
            .upgraders
            .iter()
            .map(|name| registry.upgrader(name))
            .collect::<Result<Vec<_>, _>>()?;
        let skills = self
            .skills
            .iter()
            .map(|name| registry.skill(name))
            .collect::<Result<Vec<_>, _>>()?;
        let character = self
            .character
            .as_deref()
            .map(|name| registry.character(name))
            .transpose()?;

        Ok(Loadout {
            upgraders,
            skills,
            character,
        })
    }
}
