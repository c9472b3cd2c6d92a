//! Pattern matching between trigger patterns and emitted events.
//!
//! Matching is one-directional containment: every field the pattern sets
//! must be present and equal on the event, with two exceptions.
//!
//! - `amount` is a minimum threshold (a pattern amount of 2 matches an event
//!   amount of 3).
//! - `reaction_attributes` with a single element is a membership test
//!   against the event's pair. With more elements, the event must carry the
//!   same pair in the same order.
//!
//! A pattern whose kind is [`ActivationKind::NoActivation`] never matches.

use super::{Activation, ActivationKind};

/// Evaluator for trigger patterns.
pub struct PatternMatcher;

impl PatternMatcher {
    /// Check whether `event` satisfies `pattern`.
    #[must_use]
    pub fn evaluate(pattern: &Activation, event: &Activation) -> bool {
        if pattern.kind == ActivationKind::NoActivation || pattern.kind != event.kind {
            return false;
        }

        if !field_matches(&pattern.attribute, &event.attribute)
            || !field_matches(&pattern.value, &event.value)
            || !field_matches(&pattern.card_type, &event.card_type)
            || !field_matches(&pattern.name, &event.name)
            || !field_matches(&pattern.reaction, &event.reaction)
        {
            return false;
        }

        match (pattern.amount, event.amount) {
            (Some(_), None) => return false,
            (Some(min), Some(actual)) if min > actual => return false,
            _ => {}
        }

        match (&pattern.reaction_attributes, &event.reaction_attributes) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(wanted), Some(actual)) if wanted.len() == 1 => actual.contains(&wanted[0]),
            // Multi-element patterns are not used by the shipped cards.
            (Some(wanted), Some(actual)) => wanted == actual,
        }
    }
}

fn field_matches<T: PartialEq>(pattern: &Option<T>, event: &Option<T>) -> bool {
    match (pattern, event) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(p), Some(e)) => p == e,
    }
}

impl Activation {
    /// Whether this pattern is satisfied by `event`.
    #[must_use]
    pub fn matches(&self, event: &Activation) -> bool {
        PatternMatcher::evaluate(self, event)
    }
}
