//! Activation records.
//!
//! An [`Activation`] is a single record type used two ways:
//!
//! - **Event**: something that happened. Events are stamped with a unique
//!   [`ActivationId`] and the [`CardRef`] that caused them.
//! - **Pattern**: a trigger carried by a card. Only the fields a pattern sets
//!   are checked when it is matched against an event (see
//!   [`PatternMatcher`](super::PatternMatcher)).
//!
//! ## Design Philosophy
//!
//! Every optional field is an `Option`. A pattern that leaves a field unset
//! places no constraint on it; an event that leaves a field unset can never
//! satisfy a pattern that sets it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Archetype, CardType};
use crate::ore::{Attribute, Reaction};

/// Unique, increasing identifier stamped on emitted events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActivationId(pub u64);

impl ActivationId {
    /// Create a new activation ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ActivationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Activation({})", self.0)
    }
}

/// What kind of thing happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationKind {
    /// Never matches. Marks cards that only act when called directly.
    NoActivation,
    AttributeAdded,
    AttributeRemoved,
    ReactionTriggered,
    OreValueIncreased,
    OreValueMultiplied,
    /// A card's effect fired.
    EffectActivated,
}

impl ActivationKind {
    /// Snake-case name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActivationKind::NoActivation => "no_activation",
            ActivationKind::AttributeAdded => "attribute_added",
            ActivationKind::AttributeRemoved => "attribute_removed",
            ActivationKind::ReactionTriggered => "reaction_triggered",
            ActivationKind::OreValueIncreased => "ore_value_increased",
            ActivationKind::OreValueMultiplied => "ore_value_multiplied",
            ActivationKind::EffectActivated => "effect_activated",
        }
    }
}

impl std::fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of the card instance that caused an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRef {
    pub card_type: CardType,
    pub name: String,
    /// Position of the card in its list for this round.
    pub ordinal: usize,
    pub archetypes: SmallVec<[Archetype; 4]>,
}

impl CardRef {
    /// Create a reference with no archetype tags.
    pub fn new(card_type: CardType, name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            card_type,
            name: name.into(),
            ordinal,
            archetypes: SmallVec::new(),
        }
    }

    /// Attach archetype tags (builder pattern).
    #[must_use]
    pub fn with_archetypes(mut self, archetypes: impl IntoIterator<Item = Archetype>) -> Self {
        self.archetypes.extend(archetypes);
        self
    }

    /// Whether the referenced card carries `archetype`.
    #[must_use]
    pub fn has_archetype(&self, archetype: Archetype) -> bool {
        self.archetypes.contains(&archetype)
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] (ID {})", self.card_type, self.name, self.ordinal)
    }
}

/// Participants of a reaction, resident first.
pub type ReactionPair = SmallVec<[Attribute; 2]>;

/// An event record or a trigger pattern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    pub kind: ActivationKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Attribute>,

    /// Units involved on events; minimum threshold on patterns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,

    /// Applied value on value-change events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_attributes: Option<ReactionPair>,

    /// Set on emitted events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ActivationId>,

    /// Set on emitted events only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<CardRef>,
}

impl Activation {
    /// Create an activation of `kind` with every other field unset.
    #[must_use]
    pub const fn new(kind: ActivationKind) -> Self {
        Self {
            kind,
            attribute: None,
            amount: None,
            value: None,
            card_type: None,
            name: None,
            reaction: None,
            reaction_attributes: None,
            id: None,
            source: None,
        }
    }

    /// A pattern that never matches.
    #[must_use]
    pub const fn no_activation() -> Self {
        Self::new(ActivationKind::NoActivation)
    }

    /// Attribute added, defaulting to a threshold of one unit.
    #[must_use]
    pub fn attribute_added() -> Self {
        Self::new(ActivationKind::AttributeAdded).with_amount(1)
    }

    /// Attribute removed, defaulting to a threshold of one unit.
    #[must_use]
    pub fn attribute_removed() -> Self {
        Self::new(ActivationKind::AttributeRemoved).with_amount(1)
    }

    #[must_use]
    pub const fn reaction_triggered() -> Self {
        Self::new(ActivationKind::ReactionTriggered)
    }

    #[must_use]
    pub const fn ore_value_increased() -> Self {
        Self::new(ActivationKind::OreValueIncreased)
    }

    #[must_use]
    pub const fn ore_value_multiplied() -> Self {
        Self::new(ActivationKind::OreValueMultiplied)
    }

    #[must_use]
    pub const fn effect_activated() -> Self {
        Self::new(ActivationKind::EffectActivated)
    }

    /// Set the attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attribute = Some(attribute);
        self
    }

    /// Set the amount (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Set the value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Restrict to a card type (builder pattern).
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = Some(card_type);
        self
    }

    /// Restrict to a card name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the reaction (builder pattern).
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reaction = Some(reaction);
        self
    }

    /// Set the reaction participants (builder pattern).
    #[must_use]
    pub fn with_reaction_attributes(
        mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Self {
        self.reaction_attributes = Some(attributes.into_iter().collect());
        self
    }

    /// Stamp an id (builder pattern).
    #[must_use]
    pub fn with_id(mut self, id: ActivationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach the causing card. Also copies its type and name.
    #[must_use]
    pub fn with_source(mut self, source: CardRef) -> Self {
        self.card_type = Some(source.card_type);
        self.name = Some(source.name.clone());
        self.source = Some(source);
        self
    }

    /// Whether this event was caused by a card named `name`.
    #[must_use]
    pub fn is_from(&self, name: &str) -> bool {
        self.source.as_ref().is_some_and(|s| s.name == name)
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.kind)?;
        if let Some(id) = self.id {
            write!(f, " #{}", id.raw())?;
        }
        if let Some(attribute) = self.attribute {
            write!(f, " attribute={attribute}")?;
        }
        if let Some(amount) = self.amount {
            write!(f, " amount={amount}")?;
        }
        if let Some(value) = self.value {
            write!(f, " value={value}")?;
        }
        if let Some(reaction) = self.reaction {
            write!(f, " reaction={reaction}")?;
        }
        if let Some(pair) = &self.reaction_attributes {
            let names: Vec<_> = pair.iter().map(|a| a.name()).collect();
            write!(f, " between={}", names.join("+"))?;
        }
        match &self.source {
            Some(source) => write!(f, " from {source}"),
            None => match (&self.card_type, &self.name) {
                (Some(t), Some(n)) => write!(f, " from {t} [{n}]"),
                (Some(t), None) => write!(f, " from any {t}"),
                (None, Some(n)) => write!(f, " from [{n}]"),
                (None, None) => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_id() {
        let id = ActivationId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Activation(7)");
        assert!(ActivationId::new(1) < ActivationId::new(2));
    }

    #[test]
    fn test_attribute_patterns_default_amount() {
        assert_eq!(Activation::attribute_added().amount, Some(1));
        assert_eq!(Activation::attribute_removed().amount, Some(1));
        assert_eq!(Activation::reaction_triggered().amount, None);
    }

    #[test]
    fn test_with_source_copies_identity() {
        let source = CardRef::new(CardType::Skill, "Surge", 2);
        let event = Activation::ore_value_increased()
            .with_value(50.0)
            .with_source(source.clone());

        assert_eq!(event.card_type, Some(CardType::Skill));
        assert_eq!(event.name.as_deref(), Some("Surge"));
        assert_eq!(event.source, Some(source));
        assert!(event.is_from("Surge"));
        assert!(!event.is_from("Vault"));
    }

    #[test]
    fn test_card_ref_archetypes() {
        let source = CardRef::new(CardType::Upgrader, "Flame Thrower", 0).with_archetypes([
            Archetype::Multiplicative,
            Archetype::Element(Attribute::Burn),
        ]);
        assert!(source.has_archetype(Archetype::Element(Attribute::Burn)));
        assert!(!source.has_archetype(Archetype::Element(Attribute::Wet)));
        assert_eq!(format!("{}", source), "upgrader [Flame Thrower] (ID 0)");
    }

    #[test]
    fn test_display() {
        let event = Activation::reaction_triggered()
            .with_reaction(Reaction::Vaporized)
            .with_reaction_attributes([Attribute::Wet, Attribute::Burn])
            .with_id(ActivationId::new(4));
        assert_eq!(
            format!("{}", event),
            "[reaction_triggered] #4 reaction=Vaporized between=Wet+Burn"
        );
    }

    #[test]
    fn test_activation_serialization() {
        let event = Activation::attribute_added()
            .with_attribute(Attribute::Wet)
            .with_amount(2)
            .with_id(ActivationId::new(3))
            .with_source(CardRef::new(CardType::Upgrader, "Soaker", 1));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Activation = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);

        let pattern: Activation =
            serde_json::from_str(r#"{"kind":"ReactionTriggered","reaction":"Scorched"}"#).unwrap();
        assert_eq!(pattern.reaction, Some(Reaction::Scorched));
        assert_eq!(pattern.attribute, None);
    }
}
