//! Character effect bodies.

use tracing::debug;

use super::EffectOutcome;
use crate::cards::{CharacterDef, CharacterEffect};
use crate::core::GameState;
use crate::ore::ValueChange;
use crate::triggers::{Activation, CardRef};

/// Run the character's body.
pub(crate) fn run(
    state: &mut GameState,
    def: &CharacterDef,
    source: &CardRef,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    match def.effect {
        CharacterEffect::Mechanic => mechanic(state, def, source, out),
        CharacterEffect::Witch => {
            state.increase_value(ValueChange::Add(def.value), source, out);
            EffectOutcome::Activated
        }
    }
}

fn mechanic(
    state: &mut GameState,
    def: &CharacterDef,
    source: &CardRef,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    let Some(slot) = state.character.as_mut() else {
        return EffectOutcome::NotActivated;
    };
    let charge = &mut slot.instance.activation_stacks;
    *charge += 1;
    debug!(character = %source, charge = *charge, "charge");
    if *charge < def.max_stacks {
        return EffectOutcome::NotActivated;
    }
    *charge -= def.max_stacks;
    state.increase_value(ValueChange::Multiply(def.value), source, out);
    EffectOutcome::Activated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{catalog, Loadout};
    use crate::core::EngineConfig;

    #[test]
    fn test_mechanic_charges() {
        let loadout = Loadout::new().with_character(catalog::mechanic());
        let mut state = GameState::new(&EngineConfig::default(), &loadout);
        let def = catalog::mechanic();
        let source = crate::cards::CardTemplate::card_ref(&def, 0);
        let mut out = Vec::new();

        assert_eq!(run(&mut state, &def, &source, &mut out), EffectOutcome::NotActivated);
        assert_eq!(run(&mut state, &def, &source, &mut out), EffectOutcome::NotActivated);
        assert_eq!(run(&mut state, &def, &source, &mut out), EffectOutcome::Activated);
        assert_eq!(state.ore.value(), 25.0);
        assert_eq!(state.character.as_ref().unwrap().instance.activation_stacks, 0);
    }

    #[test]
    fn test_witch_adds() {
        let loadout = Loadout::new().with_character(catalog::witch());
        let mut state = GameState::new(&EngineConfig::default(), &loadout);
        let def = catalog::witch();
        let source = crate::cards::CardTemplate::card_ref(&def, 0);
        let mut out = Vec::new();

        assert!(run(&mut state, &def, &source, &mut out).is_activated());
        assert_eq!(state.ore.value(), 105.0);
        assert_eq!(out.len(), 1);
    }
}
