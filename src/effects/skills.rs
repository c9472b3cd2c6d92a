//! Skill effect bodies.
//!
//! One function per [`SkillEffect`]. Bodies read their numeric parameters
//! from the template, keep per-round state on the skill's instance, and
//! report whether they fired. The shared bookkeeping (consumed ids, the
//! `EffectActivated` event) is done by
//! [`EffectResolver`](super::EffectResolver).

use tracing::debug;

use super::EffectOutcome::{self, Activated, NotActivated};
use crate::cards::{Archetype, CardInstance, SkillDef, SkillEffect};
use crate::core::{GameState, Phase};
use crate::ore::{Attribute, Reaction, ValueChange};
use crate::triggers::{Activation, CardRef};

/// Everything a body needs to know about the skill being run.
struct Call<'a> {
    index: usize,
    def: &'a SkillDef,
    source: &'a CardRef,
    activation: Option<&'a Activation>,
}

impl Call<'_> {
    fn instance<'s>(&self, state: &'s mut GameState) -> &'s mut CardInstance {
        &mut state.skills[self.index].instance
    }

    /// Whether the triggering event was caused by a card with this skill's name.
    fn triggered_by_self(&self) -> bool {
        self.activation.is_some_and(|a| a.is_from(&self.def.name))
    }
}

/// Run the body of the skill at `index`.
pub(crate) fn run(
    state: &mut GameState,
    index: usize,
    def: &SkillDef,
    source: &CardRef,
    activation: Option<&Activation>,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    let call = Call {
        index,
        def,
        source,
        activation,
    };
    match def.effect {
        SkillEffect::Surge => surge(state, &call, out),
        SkillEffect::SteamEngine => steam_engine(state, &call, out),
        SkillEffect::Rewind => rewind(state, &call, out),
        SkillEffect::StormConduit => storm_conduit(state, &call, out),
        SkillEffect::Current => current(state, &call, out),
        SkillEffect::DoubleStrike => double_strike(state, &call, out),
        SkillEffect::UnwaveringFlame => unwavering_flame(state, &call, out),
        SkillEffect::Ignite => ignite(state, &call, out),
        SkillEffect::BuddingBlossom => budding_blossom(state, &call, out),
        SkillEffect::BountifulInfusion => bountiful_infusion(state, &call, out),
        SkillEffect::Overflow => overflow(state, &call, out),
        SkillEffect::Volcano => volcano(state, &call, out),
        SkillEffect::Resonance => resonance(state, &call, out),
        SkillEffect::Amplifier => amplifier(state, &call, out),
        SkillEffect::Vault => vault(state, &call, out),
        SkillEffect::Catalyst => catalyst(state, &call, out),
        SkillEffect::RisingFlame => rising_flame(state, &call, out),
        SkillEffect::Cleanse => cleanse(state, &call, out),
        SkillEffect::Cascade => cascade(state, &call, out),
        SkillEffect::Quench => quench(state, &call, out),
        SkillEffect::AttributeDuplication => attribute_duplication(state, &call, out),
        SkillEffect::ScorchedAmplifier => scorched_amplifier(state, &call),
    }
}

/// Rescale a value change offered to an active passive skill.
///
/// Returns the (possibly unchanged) amount.
#[must_use]
pub fn passive_modifier(def: &SkillDef, change: ValueChange, source: &CardRef) -> f64 {
    match def.effect {
        SkillEffect::ScorchedAmplifier
            if source.has_archetype(Archetype::Element(Attribute::Burn)) =>
        {
            change.amount() * 2.0
        }
        _ => change.amount(),
    }
}

/// Remove the first event in `out` matched by `pattern`.
fn retract(pattern: &Activation, out: &mut Vec<Activation>) {
    if let Some(index) = out.iter().position(|event| pattern.matches(event)) {
        out.remove(index);
    }
}

// On-trigger skills

fn surge(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    state.increase_value(ValueChange::Add(call.def.value), call.source, out);
    Activated
}

fn steam_engine(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    if !state.ore.has_attribute(Attribute::Wet) {
        return NotActivated;
    }
    state.remove_attribute(Attribute::Wet, 1, call.source, false, out);
    if let Some(pattern) = call.def.triggers.first() {
        retract(pattern, out);
    }
    state.increase_value(ValueChange::Multiply(call.def.value), call.source, out);
    Activated
}

fn rewind(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let Some(attribute) = call.activation.and_then(|a| a.attribute) else {
        return NotActivated;
    };
    state.add_attribute(attribute, 1, call.source, out);
    Activated
}

fn storm_conduit(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    state.add_attribute(Attribute::Shock, 1, call.source, out);
    Activated
}

fn current(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let shock = state.ore.attribute_amount(Attribute::Shock) as f64;
    state.increase_value(ValueChange::Multiply(1.0 + shock), call.source, out);
    Activated
}

fn double_strike(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    if call.triggered_by_self() {
        return NotActivated;
    }
    state.add_attribute(Attribute::Shock, 1, call.source, out);
    Activated
}

fn unwavering_flame(
    state: &mut GameState,
    call: &Call<'_>,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    if state.ore.has_attribute(Attribute::Burn) {
        return NotActivated;
    }
    state.add_attribute(Attribute::Burn, 1, call.source, out);
    retract(
        &Activation::attribute_removed().with_attribute(Attribute::Burn),
        out,
    );
    state.increase_value(ValueChange::Add(call.def.value), call.source, out);
    Activated
}

fn ignite(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    if call.triggered_by_self() {
        return NotActivated;
    }
    let scorched = Activation::reaction_triggered().with_reaction(Reaction::Scorched);
    let is_scorched = call.activation.is_some_and(|a| scorched.matches(a));
    let instance = call.instance(state);

    if !instance.primed && is_scorched {
        instance.primed = true;
        debug!(skill = %call.source, "primed");
        NotActivated
    } else if instance.primed && !is_scorched {
        state.add_attribute(Attribute::Burn, 1, call.source, out);
        Activated
    } else {
        NotActivated
    }
}

fn budding_blossom(
    state: &mut GameState,
    call: &Call<'_>,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    let max = call.def.max_stacks;
    let instance = call.instance(state);
    if instance.activation_stacks < max {
        instance.activation_stacks += 1;
        debug!(skill = %call.source, growth = instance.activation_stacks, "growth");
    }
    if instance.activation_stacks < max {
        return NotActivated;
    }
    instance.activation_stacks -= max;
    state.increase_value(ValueChange::Multiply(call.def.value), call.source, out);
    state.add_attribute(Attribute::Bloom, 1, call.source, out);
    Activated
}

fn bountiful_infusion(
    state: &mut GameState,
    call: &Call<'_>,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    let Some(&attribute) = state.rng.choose(&Attribute::ALL) else {
        return NotActivated;
    };
    state.add_attribute(attribute, 1, call.source, out);
    Activated
}

fn overflow(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let Some(attribute) = call.activation.and_then(|a| a.attribute) else {
        return NotActivated;
    };
    state.add_attribute(attribute, 1, call.source, out);
    Activated
}

fn volcano(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let max = call.def.max_stacks;
    let instance = call.instance(state);
    if instance.activation_stacks < max {
        instance.activation_stacks += 1;
        debug!(skill = %call.source, erupt = instance.activation_stacks, "erupt");
    }
    if instance.activation_stacks < max {
        return NotActivated;
    }
    instance.activation_stacks -= max;
    state.add_attribute(Attribute::Burn, 2, call.source, out);
    Activated
}

fn resonance(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let Some(pair) = call.activation.and_then(|a| a.reaction_attributes.as_ref()) else {
        return NotActivated;
    };
    let Some(&attribute) = state.rng.choose(pair) else {
        return NotActivated;
    };
    state.add_attribute(attribute, 1, call.source, out);
    Activated
}

fn amplifier(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    match call.activation.and_then(|a| a.value) {
        Some(v) if v > 1.0 && v < 11.0 => {
            state.increase_value(ValueChange::Multiply(v), call.source, out);
            Activated
        }
        _ => NotActivated,
    }
}

// Static skills

fn vault(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    match (state.phase, call.activation) {
        (Phase::Main, Some(activation)) if !call.triggered_by_self() => {
            let instance = call.instance(state);
            instance.recorded += activation.value.unwrap_or(0.0);
            debug!(skill = %call.source, recorded = instance.recorded, "recorded");
            NotActivated
        }
        (Phase::End, _) => {
            let total = std::mem::take(&mut call.instance(state).recorded);
            state.increase_value(ValueChange::Add(total), call.source, out);
            Activated
        }
        _ => NotActivated,
    }
}

fn catalyst(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    match (state.phase, call.activation) {
        (Phase::Main, Some(activation)) if !call.triggered_by_self() => {
            let instance = call.instance(state);
            instance.recorded += activation.value.unwrap_or(0.0);
            debug!(skill = %call.source, recorded = instance.recorded, "recorded");
            NotActivated
        }
        (Phase::End, _) => {
            let total = std::mem::take(&mut call.instance(state).recorded);
            let factor = if total == 0.0 { 1.0 } else { total };
            state.increase_value(ValueChange::Multiply(factor), call.source, out);
            Activated
        }
        _ => NotActivated,
    }
}

fn rising_flame(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    match call.activation {
        None if state.phase == Phase::End => {
            let kindling = std::mem::take(&mut call.instance(state).activation_stacks);
            state.increase_value(
                ValueChange::Multiply(1.0 + f64::from(kindling)),
                call.source,
                out,
            );
            Activated
        }
        Some(activation) => {
            let instance = call.instance(state);
            instance.activation_stacks += activation.amount.unwrap_or(0);
            debug!(skill = %call.source, kindling = instance.activation_stacks, "kindling");
            NotActivated
        }
        None => NotActivated,
    }
}

fn cleanse(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    if state.phase != Phase::End {
        return NotActivated;
    }
    while let Some(&first) = state.ore.attributes().first() {
        state.remove_attribute(first, 1, call.source, false, out);
        call.instance(state).activation_stacks += 1;
    }
    let removed = std::mem::take(&mut call.instance(state).activation_stacks);
    state.increase_value(
        ValueChange::Multiply(1.0 + f64::from(removed)),
        call.source,
        out,
    );
    Activated
}

fn cascade(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let own_event = call.activation.is_some_and(|a| {
        a.source
            .as_ref()
            .is_some_and(|s| s.name == call.def.name && s.ordinal == call.source.ordinal)
    });
    if (state.phase != Phase::End && call.activation.is_none()) || own_event {
        return NotActivated;
    }

    match (state.phase, call.activation) {
        (Phase::Main, Some(_)) => {
            let instance = call.instance(state);
            instance.activation_stacks += 1;
            debug!(skill = %call.source, ripple = instance.activation_stacks, "ripple");
            NotActivated
        }
        (Phase::End, None) => {
            let ripple = std::mem::take(&mut call.instance(state).activation_stacks);
            state.increase_value(
                ValueChange::Multiply(1.0 + 0.5 * f64::from(ripple)),
                call.source,
                out,
            );
            Activated
        }
        _ => NotActivated,
    }
}

fn quench(state: &mut GameState, call: &Call<'_>, out: &mut Vec<Activation>) -> EffectOutcome {
    let burn = state.ore.attribute_amount(Attribute::Burn);
    if burn == 0 {
        return NotActivated;
    }
    let units = u32::try_from(burn).unwrap_or(u32::MAX);
    state.add_attribute(Attribute::Wet, units, call.source, out);
    Activated
}

fn attribute_duplication(
    state: &mut GameState,
    call: &Call<'_>,
    out: &mut Vec<Activation>,
) -> EffectOutcome {
    if state.ore.attributes().is_empty() {
        return NotActivated;
    }
    let snapshot = state.ore.attributes().to_vec();
    for attribute in snapshot {
        state.add_attribute(attribute, 1, call.source, out);
    }
    Activated
}

// Passive skills

fn scorched_amplifier(state: &mut GameState, call: &Call<'_>) -> EffectOutcome {
    call.instance(state).passive_active = true;
    debug!(skill = %call.source, "passive active");
    Activated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{catalog, CardType, Loadout};
    use crate::core::EngineConfig;
    use crate::effects::EffectResolver;
    use crate::triggers::ActivationId;

    fn state_with(skill: SkillDef) -> GameState {
        GameState::new(&EngineConfig::default(), &Loadout::new().with_skill(skill))
    }

    fn event(activation: Activation, id: u64, by: &str) -> Activation {
        activation
            .with_id(ActivationId::new(id))
            .with_source(CardRef::new(CardType::Upgrader, by, 0))
    }

    fn added(attribute: Attribute, id: u64) -> Activation {
        event(
            Activation::attribute_added().with_attribute(attribute),
            id,
            "Upgrader",
        )
    }

    fn fire(state: &mut GameState, activation: Option<&Activation>) -> (bool, Vec<Activation>) {
        let mut out = Vec::new();
        let fired = EffectResolver::apply_skill(state, 0, activation, &mut out);
        (fired, out)
    }

    #[test]
    fn test_steam_engine_needs_wet() {
        let mut state = state_with(catalog::steam_engine());
        let (fired, _) = fire(&mut state, Some(&added(Attribute::Wet, 1)));
        assert!(!fired);

        state.ore = state.ore.clone().with_attributes([Attribute::Wet]);
        let (fired, out) = fire(&mut state, Some(&added(Attribute::Wet, 2)));
        assert!(fired);
        assert_eq!(state.ore.value(), 10.0);
        assert!(state.ore.attributes().is_empty());
        assert!(out[0].is_from("Steam Engine"));
    }

    #[test]
    fn test_current_scales_with_shock() {
        let mut state = state_with(catalog::current());
        state.ore = state
            .ore
            .clone()
            .with_attributes([Attribute::Shock, Attribute::Shock]);
        fire(&mut state, Some(&added(Attribute::Shock, 1)));
        assert_eq!(state.ore.value(), 15.0);
    }

    #[test]
    fn test_double_strike_ignores_itself() {
        let mut state = state_with(catalog::double_strike());
        let own = event(
            Activation::attribute_added().with_attribute(Attribute::Shock),
            1,
            "Double Strike",
        );
        assert!(!fire(&mut state, Some(&own)).0);
        assert!(fire(&mut state, Some(&added(Attribute::Shock, 2))).0);
        assert_eq!(state.ore.attributes(), &[Attribute::Shock]);
    }

    #[test]
    fn test_unwavering_flame_restores_burn() {
        let mut state = state_with(catalog::unwavering_flame());
        let removed = event(
            Activation::attribute_removed().with_attribute(Attribute::Burn),
            1,
            "Cleanse",
        );
        let (fired, _) = fire(&mut state, Some(&removed));
        assert!(fired);
        assert_eq!(state.ore.attributes(), &[Attribute::Burn]);
        assert_eq!(state.ore.value(), 30.0);

        let again = event(
            Activation::attribute_removed().with_attribute(Attribute::Burn),
            2,
            "Cleanse",
        );
        assert!(!fire(&mut state, Some(&again)).0);
    }

    #[test]
    fn test_ignite_primes_then_fires() {
        let mut state = state_with(catalog::ignite());
        assert!(!fire(&mut state, Some(&added(Attribute::Wet, 1))).0);

        let scorched = Activation::reaction_triggered()
            .with_reaction(Reaction::Scorched)
            .with_id(ActivationId::new(2));
        assert!(!fire(&mut state, Some(&scorched)).0);
        assert!(state.skills[0].instance.primed);

        assert!(fire(&mut state, Some(&added(Attribute::Frost, 3))).0);
        assert_eq!(state.ore.attributes(), &[Attribute::Burn]);
        assert!(state.skills[0].instance.primed);
    }

    #[test]
    fn test_budding_blossom_pays_at_threshold() {
        let mut state = state_with(catalog::budding_blossom());
        assert!(!fire(&mut state, Some(&added(Attribute::Wet, 1))).0);
        assert_eq!(state.skills[0].instance.activation_stacks, 1);

        assert!(fire(&mut state, Some(&added(Attribute::Wet, 2))).0);
        assert_eq!(state.skills[0].instance.activation_stacks, 0);
        assert_eq!(state.ore.value(), 10.0);
        assert_eq!(state.ore.attributes(), &[Attribute::Bloom]);
    }

    #[test]
    fn test_volcano_erupts() {
        let mut state = state_with(catalog::volcano());
        for id in 1..=2 {
            let reaction = Activation::reaction_triggered().with_id(ActivationId::new(id));
            assert!(!fire(&mut state, Some(&reaction)).0);
        }
        let reaction = Activation::reaction_triggered().with_id(ActivationId::new(3));
        assert!(fire(&mut state, Some(&reaction)).0);
        assert_eq!(state.ore.attributes(), &[Attribute::Burn, Attribute::Burn]);
    }

    #[test]
    fn test_resonance_picks_a_participant() {
        let mut state = state_with(catalog::resonance());
        let reaction = Activation::reaction_triggered()
            .with_reaction(Reaction::Melt)
            .with_reaction_attributes([Attribute::Frost, Attribute::Burn])
            .with_id(ActivationId::new(1));
        assert!(fire(&mut state, Some(&reaction)).0);
        let added = state.ore.attributes()[0];
        assert!(added == Attribute::Frost || added == Attribute::Burn);
    }

    #[test]
    fn test_amplifier_window() {
        let mut state = state_with(catalog::amplifier());
        let small = event(Activation::ore_value_increased().with_value(3.0), 1, "Vault");
        let large = event(Activation::ore_value_increased().with_value(50.0), 2, "Surge");
        assert!(fire(&mut state, Some(&small)).0);
        assert_eq!(state.ore.value(), 15.0);
        assert!(!fire(&mut state, Some(&large)).0);
    }

    #[test]
    fn test_vault_records_then_pays() {
        let mut state = state_with(catalog::vault());
        let gain = event(Activation::ore_value_increased().with_value(10.0), 1, "Surge");
        assert!(!fire(&mut state, Some(&gain)).0);
        assert_eq!(state.skills[0].instance.recorded, 10.0);

        let own = event(Activation::ore_value_increased().with_value(99.0), 2, "Vault");
        assert!(!fire(&mut state, Some(&own)).0);
        assert_eq!(state.skills[0].instance.recorded, 10.0);

        state.phase = Phase::End;
        assert!(fire(&mut state, None).0);
        assert_eq!(state.ore.value(), 15.0);
        assert_eq!(state.skills[0].instance.recorded, 0.0);
    }

    #[test]
    fn test_catalyst_defaults_to_one() {
        let mut state = state_with(catalog::catalyst());
        state.phase = Phase::End;
        assert!(fire(&mut state, None).0);
        assert_eq!(state.ore.value(), 5.0);
    }

    #[test]
    fn test_cleanse_only_at_end() {
        let mut state = state_with(catalog::cleanse());
        state.ore = state
            .ore
            .clone()
            .with_attributes([Attribute::Wet, Attribute::Bloom, Attribute::Frost]);
        assert!(!fire(&mut state, None).0);

        state.phase = Phase::End;
        let (fired, out) = fire(&mut state, None);
        assert!(fired);
        assert!(state.ore.attributes().is_empty());
        assert_eq!(state.ore.value(), 20.0);
        let removed = out
            .iter()
            .filter(|a| a.kind == crate::triggers::ActivationKind::AttributeRemoved)
            .count();
        assert_eq!(removed, 3);
    }

    #[test]
    fn test_cascade_counts_other_skills() {
        let mut state = state_with(catalog::cascade());
        let other = Activation::effect_activated()
            .with_id(ActivationId::new(1))
            .with_source(CardRef::new(CardType::Skill, "Surge", 1));
        let own = Activation::effect_activated()
            .with_id(ActivationId::new(2))
            .with_source(CardRef::new(CardType::Skill, "Cascade", 0));
        assert!(!fire(&mut state, Some(&other)).0);
        assert!(!fire(&mut state, Some(&own)).0);
        assert_eq!(state.skills[0].instance.activation_stacks, 1);

        state.phase = Phase::End;
        assert!(fire(&mut state, None).0);
        assert_eq!(state.ore.value(), 7.5);
    }

    #[test]
    fn test_quench_and_duplication() {
        let mut state = state_with(catalog::quench());
        assert!(!fire(&mut state, None).0);
        state.ore = state
            .ore
            .clone()
            .with_attributes([Attribute::Burn, Attribute::Bloom]);
        assert!(fire(&mut state, None).0);
        // Wet lands on Burn and extinguishes it
        assert_eq!(state.ore.attributes(), &[Attribute::Bloom]);

        let mut state = state_with(catalog::attribute_duplication());
        assert!(!fire(&mut state, None).0);
        state.ore = state
            .ore
            .clone()
            .with_attributes([Attribute::Bloom, Attribute::Shock]);
        assert!(fire(&mut state, None).0);
        assert_eq!(
            state.ore.attributes(),
            &[
                Attribute::Bloom,
                Attribute::Shock,
                Attribute::Bloom,
                Attribute::Shock
            ]
        );
    }

    #[test]
    fn test_passive_modifier() {
        let amplifier = catalog::scorched_amplifier();
        let burn = CardRef::new(CardType::Upgrader, "Flame Thrower", 0)
            .with_archetypes([Archetype::Element(Attribute::Burn)]);
        let wet = CardRef::new(CardType::Upgrader, "Soaker", 0)
            .with_archetypes([Archetype::Element(Attribute::Wet)]);
        assert_eq!(passive_modifier(&amplifier, ValueChange::Multiply(2.0), &burn), 4.0);
        assert_eq!(passive_modifier(&amplifier, ValueChange::Add(10.0), &burn), 20.0);
        assert_eq!(passive_modifier(&amplifier, ValueChange::Multiply(2.0), &wet), 2.0);
        assert_eq!(passive_modifier(&catalog::surge(), ValueChange::Add(3.0), &burn), 3.0);
    }
}
