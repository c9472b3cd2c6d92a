//! Elemental attributes and the reaction chart.
//!
//! Attributes are a closed set of tags that stack on an ore. When a new unit
//! lands on an ore that already carries a unit it is weak to, the pair reacts:
//! both units are consumed and a named [`Reaction`] fires.
//!
//! The chart is directional. It is keyed by the resident attribute first and
//! the incoming attribute second, so `Burn` arriving on `Wet` reads the `Wet`
//! row (Vaporized) while `Wet` arriving on `Burn` reads the `Burn` row
//! (Extinguished).

use serde::{Deserialize, Serialize};

/// An elemental tag carried by an ore.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Wet,
    Burn,
    Bloom,
    Shock,
    Frost,
}

impl Attribute {
    /// Every attribute, in catalog order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Wet,
        Attribute::Burn,
        Attribute::Bloom,
        Attribute::Shock,
        Attribute::Frost,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Wet => "Wet",
            Attribute::Burn => "Burn",
            Attribute::Bloom => "Bloom",
            Attribute::Shock => "Shock",
            Attribute::Frost => "Frost",
        }
    }

    /// Look up an attribute by its display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// The reaction produced when `incoming` lands on a resident `self`.
    #[must_use]
    pub const fn reaction(self, incoming: Attribute) -> Option<Reaction> {
        use Attribute::*;
        match (self, incoming) {
            (Wet, Burn) => Some(Reaction::Vaporized),
            (Wet, Shock) => Some(Reaction::Electrocute),
            (Wet, Frost) => Some(Reaction::Freeze),
            (Burn, Wet) => Some(Reaction::Extinguished),
            (Burn, Bloom) => Some(Reaction::Scorched),
            (Burn, Frost) => Some(Reaction::Melt),
            (Bloom, Burn) => Some(Reaction::Scorched),
            (Shock, Wet) => Some(Reaction::Electrocute),
            (Frost, Wet) => Some(Reaction::Freeze),
            (Frost, Burn) => Some(Reaction::Melt),
            _ => None,
        }
    }

    /// Whether a resident `self` reacts with `incoming`.
    #[must_use]
    pub const fn is_weak_to(self, incoming: Attribute) -> bool {
        self.reaction(incoming).is_some()
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Named outcome of two attributes reacting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reaction {
    Vaporized,
    Electrocute,
    Freeze,
    Extinguished,
    Scorched,
    Melt,
}

impl Reaction {
    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Reaction::Vaporized => "Vaporized",
            Reaction::Electrocute => "Electrocute",
            Reaction::Freeze => "Freeze",
            Reaction::Extinguished => "Extinguished",
            Reaction::Scorched => "Scorched",
            Reaction::Melt => "Melt",
        }
    }
}

impl std::fmt::Display for Reaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
