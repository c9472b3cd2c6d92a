//! Cascade resolution.
//!
//! `CascadeResolver::handle_new_triggers` walks a queue of freshly emitted
//! activations. For each one it offers the activation to the character and
//! then to every skill in list order, trying each of a card's trigger
//! patterns in turn. Whatever an activated card emits goes into a side
//! buffer that is resolved depth-first before the next pattern is tried.
//!
//! Activations that triggered nothing are removed from the queue; the
//! survivors are returned.
//!
//! Nesting is bounded by the state's cascade depth limit. A queue that would
//! exceed it is dropped and reported as a [`CascadeOverflow`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::cards::CardTemplate;
use crate::core::GameState;
use crate::effects::EffectResolver;
use crate::triggers::Activation;

/// Record of activations dropped at the cascade depth limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeOverflow {
    /// Configured limit that was hit.
    pub max_depth: usize,
    /// Number of activations left unresolved.
    pub dropped: usize,
}

/// Resolves activation queues against card triggers.
pub struct CascadeResolver;

impl CascadeResolver {
    /// Resolve `queue` to a fixpoint. Returns the activations that triggered something.
    pub fn handle_new_triggers(state: &mut GameState, queue: Vec<Activation>) -> Vec<Activation> {
        if queue.is_empty() {
            return queue;
        }
        if !state.enter_cascade() {
            warn!(dropped = queue.len(), "cascade depth limit reached");
            state.record_overflow(queue.len());
            return Vec::new();
        }

        let mut queue = queue;
        let mut i = 0;
        while i < queue.len() {
            if state.debug {
                trace!(index = i, queue = %QueueDump(&queue), "resolving");
            }
            if Self::offer(state, &queue[i]) {
                i += 1;
            } else {
                queue.remove(i);
            }
        }

        state.exit_cascade();
        queue
    }

    /// Offer one activation to every card. Returns whether any card activated.
    fn offer(state: &mut GameState, activation: &Activation) -> bool {
        let mut activated = false;
        let mut side = Vec::new();

        if let Some(character) = state.character.as_ref() {
            let def = Arc::clone(&character.def);
            for pattern in def.triggers() {
                if pattern.matches(activation)
                    && EffectResolver::apply_passive(state, Some(activation), &mut side)
                {
                    activated = true;
                    Self::drain(state, &mut side);
                }
            }
        }

        for index in 0..state.skills.len() {
            let def = Arc::clone(&state.skills[index].def);
            for pattern in def.triggers() {
                if pattern.matches(activation)
                    && EffectResolver::apply_skill(state, index, Some(activation), &mut side)
                {
                    activated = true;
                    Self::drain(state, &mut side);
                }
            }
        }

        activated
    }

    fn drain(state: &mut GameState, side: &mut Vec<Activation>) {
        if !side.is_empty() {
            Self::handle_new_triggers(state, std::mem::take(side));
        }
    }
}

/// Resolve `queue` against the cards in `state`.
///
/// Shorthand for [`CascadeResolver::handle_new_triggers`].
pub fn handle_new_triggers(state: &mut GameState, queue: Vec<Activation>) -> Vec<Activation> {
    CascadeResolver::handle_new_triggers(state, queue)
}

struct QueueDump<'a>(&'a [Activation]);

impl std::fmt::Display for QueueDump<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, activation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{activation}")?;
        }
        Ok(())
    }
}
