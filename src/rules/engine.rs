//! Round engine.
//!
//! A round runs in four steps:
//! 1. Fresh instances for every upgrader and skill
//! 2. MAIN: each upgrader processes the ore in order, and its output cascades
//! 3. END: each static skill pays off in order, and its output cascades
//! 4. Skill state is cleared
//!
//! The END phase is only visible to the payoff itself. The cascade that
//! follows a payoff resolves with the phase reading MAIN again, so static
//! skills keep recording value produced by another skill's payoff.

use tracing::info;

use crate::cards::SkillKind;
use crate::core::{GameState, Phase};
use crate::effects::EffectResolver;
use crate::ore::Attribute;
use crate::stack::{CascadeOverflow, CascadeResolver};
use crate::triggers::Activation;

/// Outcome of one round.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundReport {
    /// Ore value at the end of the round.
    pub final_value: f64,
    /// Attributes left on the ore.
    pub attributes: Vec<Attribute>,
    /// Every activation emitted during the round, in emission order.
    pub activations: Vec<Activation>,
    /// Set when some cascade was cut off at the depth limit.
    pub overflow: Option<CascadeOverflow>,
}

/// Runs rounds.
pub struct RoundEngine;

impl RoundEngine {
    /// Run one round on `state`.
    pub fn run_round(state: &mut GameState) -> RoundReport {
        state.begin_round();
        info!(ore = %state.ore, "round started");

        for index in 0..state.upgraders.len() {
            let mut produced = Vec::new();
            EffectResolver::process_ore(state, index, &mut produced);
            CascadeResolver::handle_new_triggers(state, produced);
        }

        state.phase = Phase::End;
        info!(phase = %state.phase, value = state.ore.value(), "phase changed");
        for index in 0..state.skills.len() {
            if state.skills[index].def.kind != SkillKind::Static {
                continue;
            }
            let mut produced = Vec::new();
            state.phase = Phase::End;
            EffectResolver::apply_skill(state, index, None, &mut produced);
            state.phase = Phase::Main;
            CascadeResolver::handle_new_triggers(state, produced);
        }
        state.phase = Phase::End;

        state.end_round();
        let overflow = state.take_overflow();
        info!(
            ore = %state.ore,
            final_value = state.ore.value(),
            overflow = overflow.is_some(),
            "round finished"
        );

        RoundReport {
            final_value: state.ore.value(),
            attributes: state.ore.attributes().to_vec(),
            activations: state.take_log(),
            overflow,
        }
    }
}

/// Run one round on `state`.
///
/// Shorthand for [`RoundEngine::run_round`].
pub fn run_round(state: &mut GameState) -> RoundReport {
    RoundEngine::run_round(state)
}
