//! Card definitions - static card data.
//!
//! Definitions are the immutable templates of the three card families:
//! [`UpgraderDef`], [`SkillDef`] and [`CharacterDef`]. They are shared via
//! `Arc` between the registry and any number of game states.
//!
//! Per-round mutable data (stacks, records, consumed activation ids) lives
//! separately in [`CardInstance`](super::CardInstance).

use serde::{Deserialize, Serialize};

use crate::ore::{Attribute, ValueChange};
use crate::triggers::{Activation, CardRef};

/// Card family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Upgrader,
    Skill,
    Character,
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CardType::Upgrader => "upgrader",
            CardType::Skill => "skill",
            CardType::Character => "character",
        })
    }
}

/// Shop rarity. Not interpreted by the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    R,
    UC,
    SR,
    SSR,
}

/// Descriptive tag a card carries.
///
/// Passive skills inspect the tags of a value change's source to decide
/// whether to rescale it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Additive,
    Multiplicative,
    Element(Attribute),
    Reaction,
    AddAttribute,
    RemoveAttribute,
    Random,
}

/// How a skill is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Fires when one of its triggers matches.
    OnTrigger,
    /// Accumulates during MAIN, pays off once at END.
    Static,
    /// Switches on for the round, then rescales the value pipeline.
    Passive,
}

/// Behaviour of a skill. Each variant names one effect body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillEffect {
    Surge,
    SteamEngine,
    Rewind,
    StormConduit,
    Current,
    DoubleStrike,
    UnwaveringFlame,
    Ignite,
    BuddingBlossom,
    BountifulInfusion,
    Overflow,
    Volcano,
    Resonance,
    Amplifier,
    Vault,
    Catalyst,
    RisingFlame,
    Cleanse,
    Cascade,
    Quench,
    AttributeDuplication,
    ScorchedAmplifier,
}

impl SkillEffect {
    /// The skill kind this body is written for.
    #[must_use]
    pub const fn kind(self) -> SkillKind {
        use SkillEffect::*;
        match self {
            Vault | Catalyst | RisingFlame | Cleanse | Cascade | Quench | AttributeDuplication => {
                SkillKind::Static
            }
            ScorchedAmplifier => SkillKind::Passive,
            _ => SkillKind::OnTrigger,
        }
    }

    /// Whether the body pays off at a `max_stacks` threshold.
    #[must_use]
    pub const fn uses_max_stacks(self) -> bool {
        matches!(self, SkillEffect::BuddingBlossom | SkillEffect::Volcano)
    }
}

/// Behaviour of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterEffect {
    /// Charges on Shock, pays out a multiplier when full.
    Mechanic,
    /// Adds value on every reaction.
    Witch,
}

/// Shared view over the three definition families.
pub trait CardTemplate {
    /// Card family of this template.
    fn card_type(&self) -> CardType;

    /// Unique card name.
    fn name(&self) -> &str;

    /// Archetype tags.
    fn archetypes(&self) -> &[Archetype];

    /// Trigger patterns. Empty for upgraders.
    fn triggers(&self) -> &[Activation];

    /// Reference to the instance of this template at `ordinal`.
    fn card_ref(&self, ordinal: usize) -> CardRef {
        CardRef::new(self.card_type(), self.name(), ordinal)
            .with_archetypes(self.archetypes().iter().copied())
    }
}

/// Upgrader template: changes the ore value and may grant an attribute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpgraderDef {
    pub name: String,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
    /// Applied once per round when the ore passes the upgrader.
    pub change: ValueChange,
    /// Attribute granted after the value change.
    #[serde(default)]
    pub grants: Option<Attribute>,
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
}

impl UpgraderDef {
    /// Create an upgrader applying `change`.
    pub fn new(name: impl Into<String>, change: ValueChange) -> Self {
        let archetypes = match change {
            ValueChange::Add(_) => vec![Archetype::Additive],
            ValueChange::Multiply(_) => vec![Archetype::Multiplicative],
        };
        Self {
            name: name.into(),
            rarity: Rarity::default(),
            description: String::new(),
            change,
            grants: None,
            archetypes,
        }
    }

    /// Grant one unit of `attribute` per pass (builder pattern).
    ///
    /// Also tags the upgrader with the element.
    #[must_use]
    pub fn granting(mut self, attribute: Attribute) -> Self {
        self.grants = Some(attribute);
        self.archetypes.push(Archetype::Element(attribute));
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl CardTemplate for UpgraderDef {
    fn card_type(&self) -> CardType {
        CardType::Upgrader
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    fn triggers(&self) -> &[Activation] {
        &[]
    }
}

/// Skill template.
///
/// ## Example
///
/// ```
/// use ore_engine::cards::{Rarity, SkillDef, SkillEffect, SkillKind};
/// use ore_engine::ore::Attribute;
/// use ore_engine::triggers::Activation;
///
/// let surge = SkillDef::new("Surge", SkillEffect::Surge)
///     .with_trigger(Activation::attribute_added().with_attribute(Attribute::Wet))
///     .with_value(50.0)
///     .with_rarity(Rarity::R);
///
/// assert_eq!(surge.kind, SkillKind::OnTrigger);
/// assert_eq!(surge.triggers.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillDef {
    pub name: String,
    pub kind: SkillKind,
    pub effect: SkillEffect,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub triggers: Vec<Activation>,
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    /// Numeric parameter of the effect body (addend or multiplier).
    #[serde(default)]
    pub value: f64,
    /// Stack threshold for bodies that pay off when full.
    #[serde(default)]
    pub max_stacks: u32,
    /// Kept out of the shop pool.
    #[serde(default)]
    pub unlisted: bool,
}

impl SkillDef {
    /// Create a skill whose kind follows from its effect.
    pub fn new(name: impl Into<String>, effect: SkillEffect) -> Self {
        Self {
            name: name.into(),
            kind: effect.kind(),
            effect,
            rarity: Rarity::default(),
            description: String::new(),
            triggers: Vec::new(),
            archetypes: Vec::new(),
            value: 0.0,
            max_stacks: 0,
            unlisted: false,
        }
    }

    /// Add a trigger pattern (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, pattern: Activation) -> Self {
        self.triggers.push(pattern);
        self
    }

    /// Add an archetype tag (builder pattern).
    #[must_use]
    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetypes.push(archetype);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_max_stacks(mut self, max_stacks: u32) -> Self {
        self.max_stacks = max_stacks;
        self
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Keep this skill out of the shop pool (builder pattern).
    #[must_use]
    pub fn unlisted(mut self) -> Self {
        self.unlisted = true;
        self
    }
}

impl CardTemplate for SkillDef {
    fn card_type(&self) -> CardType {
        CardType::Skill
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    fn triggers(&self) -> &[Activation] {
        &self.triggers
    }
}

/// Character template. A loadout has at most one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterDef {
    pub name: String,
    pub effect: CharacterEffect,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub triggers: Vec<Activation>,
    #[serde(default)]
    pub archetypes: Vec<Archetype>,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub max_stacks: u32,
}

impl CharacterDef {
    /// Create a character.
    pub fn new(name: impl Into<String>, effect: CharacterEffect) -> Self {
        Self {
            name: name.into(),
            effect,
            description: String::new(),
            triggers: Vec::new(),
            archetypes: Vec::new(),
            value: 0.0,
            max_stacks: 0,
        }
    }

    /// Add a trigger pattern (builder pattern).
    #[must_use]
    pub fn with_trigger(mut self, pattern: Activation) -> Self {
        self.triggers.push(pattern);
        self
    }

    #[must_use]
    pub fn with_archetype(mut self, archetype: Archetype) -> Self {
        self.archetypes.push(archetype);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn with_max_stacks(mut self, max_stacks: u32) -> Self {
        self.max_stacks = max_stacks;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl CardTemplate for CharacterDef {
    fn card_type(&self) -> CardType {
        CardType::Character
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn archetypes(&self) -> &[Archetype] {
        &self.archetypes
    }

    fn triggers(&self) -> &[Activation] {
        &self.triggers
    }
}
