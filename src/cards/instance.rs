//! Card instances - per-round card state.
//!
//! `CardInstance` holds the mutable bookkeeping of one card for one round:
//! stacks, an accumulated record, the passive and primed flags, and the set
//! of activation ids the card has already consumed.
//!
//! A [`CardSlot`] pairs the shared immutable template with its instance.
//! Upgrader and skill instances are rebuilt at the start of each round. The
//! character's instance survives rounds; only its consumed ids are cleared.

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::definition::CardTemplate;
use crate::triggers::{ActivationId, CardRef};

/// Mutable per-round state of a card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Position of the card in its list.
    pub ordinal: usize,

    /// Named per card: Growth, Erupt, Kindling, Ripple, Charge.
    pub activation_stacks: u32,

    /// Value accumulated during MAIN for an END payoff.
    pub recorded: f64,

    /// Set once a passive skill has switched on for the round.
    pub passive_active: bool,

    /// Auxiliary arming flag.
    pub primed: bool,

    /// Activation ids this instance has already acted on.
    #[serde(default)]
    pub consumed: FxHashSet<ActivationId>,
}

impl CardInstance {
    /// Fresh instance at `ordinal`.
    #[must_use]
    pub fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            ..Self::default()
        }
    }

    /// Whether `id` was already consumed.
    #[must_use]
    pub fn has_consumed(&self, id: ActivationId) -> bool {
        self.consumed.contains(&id)
    }

    /// Mark `id` as consumed.
    pub fn consume(&mut self, id: ActivationId) {
        self.consumed.insert(id);
    }

    /// Clear all counters, flags and consumed ids. Keeps the ordinal.
    pub fn reset(&mut self) {
        *self = Self::new(self.ordinal);
    }

    /// Whether nothing has been recorded since the last reset.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.activation_stacks == 0
            && self.recorded == 0.0
            && !self.passive_active
            && !self.primed
            && self.consumed.is_empty()
    }
}

/// A card in play: shared template plus its instance.
#[derive(Clone, Debug)]
pub struct CardSlot<D> {
    pub def: Arc<D>,
    pub instance: CardInstance,
}

impl<D: CardTemplate> CardSlot<D> {
    /// Place `def` at `ordinal` with a fresh instance.
    #[must_use]
    pub fn new(def: Arc<D>, ordinal: usize) -> Self {
        Self {
            def,
            instance: CardInstance::new(ordinal),
        }
    }

    /// Reference to this card for event sources.
    #[must_use]
    pub fn card_ref(&self) -> CardRef {
        self.def.card_ref(self.instance.ordinal)
    }
}
