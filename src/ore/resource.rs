//! The ore: a numeric value plus an ordered multiset of attributes.

use serde::{Deserialize, Serialize};

use super::Attribute;

/// A change to the ore's value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ValueChange {
    /// Add the amount to the value.
    Add(f64),
    /// Multiply the value by the amount.
    Multiply(f64),
}

impl ValueChange {
    /// The raw amount carried by this change.
    #[must_use]
    pub const fn amount(self) -> f64 {
        match self {
            ValueChange::Add(v) | ValueChange::Multiply(v) => v,
        }
    }

    /// Same kind of change with a different amount.
    #[must_use]
    pub const fn with_amount(self, amount: f64) -> Self {
        match self {
            ValueChange::Add(_) => ValueChange::Add(amount),
            ValueChange::Multiply(_) => ValueChange::Multiply(amount),
        }
    }

    /// Whether applying this change leaves any value untouched.
    #[must_use]
    pub fn is_identity(self) -> bool {
        match self {
            ValueChange::Add(v) => v == 0.0,
            ValueChange::Multiply(v) => v == 1.0,
        }
    }
}

impl std::fmt::Display for ValueChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueChange::Add(v) => write!(f, "+{v}"),
            ValueChange::Multiply(v) => write!(f, "x{v}"),
        }
    }
}

/// The resource every card works on.
///
/// Attribute order is insertion order and is observable: the reaction scan
/// walks it front to back and removals take the first unit of a kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ore {
    /// Display name.
    pub name: String,
    base_value: f64,
    value: f64,
    attributes: Vec<Attribute>,
}

impl Ore {
    /// Create an ore worth `base_value` with no attributes.
    pub fn new(name: impl Into<String>, base_value: f64) -> Self {
        Self {
            name: name.into(),
            base_value,
            value: base_value,
            attributes: Vec::new(),
        }
    }

    /// Seed the ore with attributes, bypassing reactions.
    #[must_use]
    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// The value the ore started with.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Whether at least one unit of `attribute` is present.
    #[must_use]
    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Number of units of `attribute` present.
    #[must_use]
    pub fn attribute_amount(&self, attribute: Attribute) -> usize {
        self.attributes.iter().filter(|a| **a == attribute).count()
    }

    /// Comma-separated attribute names, e.g. `"Wet, Burn"`.
    #[must_use]
    pub fn attribute_list(&self) -> String {
        self.attributes
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Return value and attributes to their starting point.
    pub fn reset(&mut self) {
        self.value = self.base_value;
        self.attributes.clear();
    }

    pub(crate) fn apply(&mut self, change: ValueChange) {
        match change {
            ValueChange::Add(v) => self.value += v,
            ValueChange::Multiply(v) => self.value *= v,
        }
    }

    pub(crate) fn push_units(&mut self, attribute: Attribute, amount: u32) {
        self.attributes
            .extend(std::iter::repeat(attribute).take(amount as usize));
    }

    pub(crate) fn attribute_at(&self, index: usize) -> Option<Attribute> {
        self.attributes.get(index).copied()
    }

    /// Remove the first unit of `attribute`. Returns false if none was present.
    pub(crate) fn remove_first(&mut self, attribute: Attribute) -> bool {
        match self.attributes.iter().position(|a| *a == attribute) {
            Some(index) => {
                self.attributes.remove(index);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Display for Ore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.value, self.attribute_list())
    }
}
