//! Effect resolution - running card effects against the game state.
//!
//! `EffectResolver` implements the contract every triggered card shares:
//!
//! 1. An activation this instance already consumed is ignored.
//! 2. Otherwise the card's body runs and reports an [`EffectOutcome`].
//! 3. On `Activated` the activation id is consumed and an
//!    `EffectActivated` event tagged with the card is emitted.
//!
//! Cards are addressed by slot index so bodies can borrow the template
//! while mutating the state.

use std::sync::Arc;

use tracing::debug;

use super::{characters, skills};
use crate::cards::CardInstance;
use crate::core::GameState;
use crate::triggers::{Activation, CardRef};

/// Result of running a card body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    /// The effect fired.
    Activated,
    /// The effect did not fire; any bookkeeping it did still stands.
    NotActivated,
}

impl EffectOutcome {
    /// Whether the effect fired.
    #[must_use]
    pub const fn is_activated(self) -> bool {
        matches!(self, EffectOutcome::Activated)
    }
}

/// Runs card effects on game state.
pub struct EffectResolver;

impl EffectResolver {
    /// Pass the ore through the upgrader at `index`.
    ///
    /// Applies the value change, grants the attribute if any, and emits
    /// `EffectActivated` tagged with the upgrader.
    pub fn process_ore(state: &mut GameState, index: usize, out: &mut Vec<Activation>) {
        let Some(slot) = state.upgraders.get(index) else {
            return;
        };
        let def = Arc::clone(&slot.def);
        let source = slot.card_ref();

        state.increase_value(def.change, &source, out);
        if let Some(attribute) = def.grants {
            state.add_attribute(attribute, 1, &source, out);
        }
        out.push(state.emit(Activation::effect_activated().with_source(source)));
        debug!(
            upgrader = %def.name,
            value = state.ore.value(),
            attributes = %state.ore.attribute_list(),
            "ore processed"
        );
    }

    /// Run the skill at `index`, optionally in response to `activation`.
    ///
    /// Returns whether the skill activated.
    pub fn apply_skill(
        state: &mut GameState,
        index: usize,
        activation: Option<&Activation>,
        out: &mut Vec<Activation>,
    ) -> bool {
        let Some(slot) = state.skills.get(index) else {
            return false;
        };
        if already_consumed(&slot.instance, activation) {
            return false;
        }
        let def = Arc::clone(&slot.def);
        let source = slot.card_ref();

        let outcome = skills::run(state, index, &def, &source, activation, out);
        if !outcome.is_activated() {
            return false;
        }
        if let Some(id) = activation.and_then(|a| a.id) {
            state.skills[index].instance.consume(id);
        }
        Self::announce(state, source, out);
        true
    }

    /// Run the character, optionally in response to `activation`.
    ///
    /// Returns whether the character activated.
    pub fn apply_passive(
        state: &mut GameState,
        activation: Option<&Activation>,
        out: &mut Vec<Activation>,
    ) -> bool {
        let Some(slot) = state.character.as_ref() else {
            return false;
        };
        if already_consumed(&slot.instance, activation) {
            return false;
        }
        let def = Arc::clone(&slot.def);
        let source = slot.card_ref();

        let outcome = characters::run(state, &def, &source, out);
        if !outcome.is_activated() {
            return false;
        }
        if let (Some(id), Some(slot)) = (activation.and_then(|a| a.id), state.character.as_mut()) {
            slot.instance.consume(id);
        }
        Self::announce(state, source, out);
        true
    }

    fn announce(state: &mut GameState, source: CardRef, out: &mut Vec<Activation>) {
        debug!(
            card = %source,
            value = state.ore.value(),
            attributes = %state.ore.attribute_list(),
            "effect activated"
        );
        out.push(state.emit(Activation::effect_activated().with_source(source)));
    }
}

fn already_consumed(instance: &CardInstance, activation: Option<&Activation>) -> bool {
    activation
        .and_then(|a| a.id)
        .is_some_and(|id| instance.has_consumed(id))
}
