//! Round integration tests.
//!
//! These tests run full rounds over small loadouts and check the final ore,
//! the activation log, per-round resets and the cascade depth limit.

use std::cell::RefCell;
use std::rc::Rc;

use ore_engine::cards::{catalog, Loadout, UpgraderDef};
use ore_engine::core::{EngineConfig, GameState};
use ore_engine::ore::{Attribute, Reaction, ValueChange};
use ore_engine::rules::run_round;
use ore_engine::triggers::{Activation, ActivationKind};

fn play(loadout: &Loadout) -> (GameState, ore_engine::RoundReport) {
    play_with(&EngineConfig::default(), loadout)
}

fn play_with(config: &EngineConfig, loadout: &Loadout) -> (GameState, ore_engine::RoundReport) {
    let mut state = GameState::new(config, loadout);
    let report = run_round(&mut state);
    (state, report)
}

fn adder(amount: f64) -> UpgraderDef {
    UpgraderDef::new(format!("Adder {amount}"), ValueChange::Add(amount))
}

fn multiplier(factor: f64) -> UpgraderDef {
    UpgraderDef::new(format!("Multiplier {factor}"), ValueChange::Multiply(factor))
}

// =============================================================================
// Value pipeline
// =============================================================================

/// Test a single upgrader feeding an end-of-round payoff.
#[test]
fn test_flame_thrower_with_rising_flame() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::flame_thrower())
        .with_skill(catalog::rising_flame());
    let (_, report) = play(&loadout);

    assert_eq!(report.final_value, 20.0);
    assert_eq!(report.attributes, vec![Attribute::Burn]);
    assert!(report.overflow.is_none());
}

/// Test that upgraders apply strictly in list order.
#[test]
fn test_upgrader_order_matters() {
    let add_first = Loadout::new()
        .with_upgrader(adder(3.0))
        .with_upgrader(multiplier(2.0));
    let multiply_first = Loadout::new()
        .with_upgrader(multiplier(2.0))
        .with_upgrader(adder(3.0));

    assert_eq!(play(&add_first).1.final_value, 16.0);
    assert_eq!(play(&multiply_first).1.final_value, 13.0);
}

/// Test that Vault banks every increase and pays it out once.
#[test]
fn test_vault_pays_recorded_increases() {
    let loadout = Loadout::new()
        .with_upgrader(adder(10.0))
        .with_upgrader(adder(10.0))
        .with_skill(catalog::vault());
    let (_, report) = play(&loadout);
    assert_eq!(report.final_value, 45.0);
}

/// Test that Budding Blossom blooms on its second Growth.
#[test]
fn test_budding_blossom_blooms() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::soaker())
        .with_skill(catalog::budding_blossom());
    let (_, report) = play(&loadout);

    assert_eq!(report.final_value, 40.0);
    assert_eq!(
        report.attributes,
        vec![Attribute::Wet, Attribute::Wet, Attribute::Bloom]
    );
}

/// Test that Cascade counts other skills' activations.
#[test]
fn test_cascade_counts_skill_activations() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_skill(catalog::surge())
        .with_skill(catalog::cascade());
    let (_, report) = play(&loadout);

    // 5 x2 = 10, Surge +50 = 60, one ripple: x1.5 = 90
    assert_eq!(report.final_value, 90.0);
}

/// Test that a removal by a skill is undone by Rewind without re-arming
/// Steam Engine.
#[test]
fn test_steam_engine_and_rewind() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_skill(catalog::steam_engine())
        .with_skill(catalog::rewind());
    let (_, report) = play(&loadout);

    assert_eq!(report.final_value, 20.0);
    assert_eq!(report.attributes, vec![Attribute::Wet]);
}

// =============================================================================
// Reactions and characters
// =============================================================================

/// Test that the Witch cashes in on a Vaporized reaction.
#[test]
fn test_witch_vaporize() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::flame_thrower())
        .with_character(catalog::witch());
    let (_, report) = play(&loadout);

    assert_eq!(report.final_value, 120.0);
    assert!(report.attributes.is_empty());

    let reactions: Vec<_> = report
        .activations
        .iter()
        .filter(|a| a.kind == ActivationKind::ReactionTriggered)
        .collect();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].reaction, Some(Reaction::Vaporized));
}

/// Test that the Mechanic multiplies on its third Charge.
#[test]
fn test_mechanic_three_zappers() {
    let config = EngineConfig::default().with_base_value(1.0);
    let loadout = Loadout::new()
        .with_upgrader(catalog::zapper())
        .with_upgrader(catalog::zapper())
        .with_upgrader(catalog::zapper())
        .with_character(catalog::mechanic());
    let (_, report) = play_with(&config, &loadout);

    // 1 x2 x2 x2 = 8, then x5 on the third Shock
    assert_eq!(report.final_value, 40.0);
    assert_eq!(report.attributes, vec![Attribute::Shock; 3]);
}

/// Test that the Mechanic's Charge carries into the next round.
#[test]
fn test_mechanic_charge_persists() {
    let config = EngineConfig::default().with_base_value(1.0);
    let loadout = Loadout::new()
        .with_upgrader(catalog::zapper())
        .with_upgrader(catalog::zapper())
        .with_character(catalog::mechanic());
    let mut state = GameState::new(&config, &loadout);

    assert_eq!(run_round(&mut state).final_value, 4.0);
    state.ore.reset();
    // Charge 2 carried over: the first Shock multiplies.
    assert_eq!(run_round(&mut state).final_value, 20.0);
}

/// Test that Scorched Amplifier doubles the next Burn upgrader's multiplier.
#[test]
fn test_scorched_amplifier() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::floral_infuser())
        .with_upgrader(catalog::flame_thrower())
        .with_upgrader(catalog::flame_thrower())
        .with_skill(catalog::scorched_amplifier());
    let (_, report) = play(&loadout);

    // 5 x2 = 10, x2 = 20 then Scorched, then x4 = 80
    assert_eq!(report.final_value, 80.0);
    assert_eq!(report.attributes, vec![Attribute::Burn]);

    let boosted = report
        .activations
        .iter()
        .filter(|a| a.kind == ActivationKind::OreValueMultiplied)
        .last()
        .and_then(|a| a.value);
    assert_eq!(boosted, Some(4.0));
}

// =============================================================================
// Round bookkeeping
// =============================================================================

/// Test that every skill instance is cleared after a round.
#[test]
fn test_skill_state_cleared_after_round() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::floral_infuser())
        .with_upgrader(catalog::flame_thrower())
        .with_upgrader(catalog::soaker())
        .with_skill(catalog::vault())
        .with_skill(catalog::rising_flame())
        .with_skill(catalog::budding_blossom())
        .with_skill(catalog::ignite())
        .with_skill(catalog::scorched_amplifier());
    let (state, _) = play(&loadout);

    for slot in &state.skills {
        assert!(
            slot.instance.is_pristine(),
            "{} kept state after the round",
            slot.def.name
        );
    }
}

/// Test that activation ids are unique and increasing within a round.
#[test]
fn test_activation_ids_increase() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::flame_thrower())
        .with_skill(catalog::surge())
        .with_character(catalog::witch());
    let (_, report) = play(&loadout);

    let ids: Vec<_> = report.activations.iter().filter_map(|a| a.id).collect();
    assert_eq!(ids.len(), report.activations.len());
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

/// Test that the same seed replays the same round.
#[test]
fn test_seeded_rounds_are_deterministic() {
    let config = EngineConfig::default().with_seed(42);
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::flame_thrower())
        .with_upgrader(catalog::zapper())
        .with_skill(catalog::resonance())
        .with_skill(catalog::volcano());

    let (_, first) = play_with(&config, &loadout);
    let (_, second) = play_with(&config, &loadout);
    assert_eq!(first, second);
}

/// Test that a sink sees exactly the activation log.
#[test]
fn test_sink_observes_log() {
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::flame_thrower())
        .with_skill(catalog::surge())
        .with_character(catalog::witch());

    let seen: Rc<RefCell<Vec<Activation>>> = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    let mut observed = GameState::new(&EngineConfig::default(), &loadout)
        .with_sink(move |a: &Activation| recorder.borrow_mut().push(a.clone()));
    let with_sink = run_round(&mut observed);

    let (_, without_sink) = play(&loadout);

    assert_eq!(*seen.borrow(), with_sink.activations);
    assert_eq!(with_sink, without_sink);

    observed.set_sink(None);
    observed.ore.reset();
    let detached = run_round(&mut observed);
    assert!(!detached.activations.is_empty());
    assert_eq!(seen.borrow().len(), with_sink.activations.len());
}

// =============================================================================
// Cascade depth
// =============================================================================

/// Test that a tight depth limit drops nested activations but keeps going.
#[test]
fn test_depth_limit_reports_overflow() {
    let config = EngineConfig::default().with_max_cascade_depth(1);
    let loadout = Loadout::new()
        .with_upgrader(catalog::soaker())
        .with_upgrader(catalog::flame_thrower())
        .with_character(catalog::witch());
    let (_, report) = play_with(&config, &loadout);

    assert_eq!(report.final_value, 120.0);
    let overflow = report.overflow.expect("nested cascade should overflow");
    assert_eq!(overflow.max_depth, 1);
    assert_eq!(overflow.dropped, 2);
}

/// Test that a zero depth limit disables cascades but not payoffs.
#[test]
fn test_zero_depth_disables_cascades() {
    let config = EngineConfig::default().with_max_cascade_depth(0);
    let loadout = Loadout::new()
        .with_upgrader(catalog::flame_thrower())
        .with_skill(catalog::rising_flame());
    let (_, report) = play_with(&config, &loadout);

    assert_eq!(report.final_value, 10.0);
    assert!(report.overflow.is_some());
}
