//! # ore-engine
//!
//! Rules engine for a card-driven ore refining game.
//!
//! An ore carries a numeric value and an ordered multiset of elemental
//! attributes. Cards change both: upgraders process the ore once per round,
//! skills and a character react to what happens, and attributes react with
//! each other. Every change is an [`Activation`], and activations cascade
//! until nothing else triggers.
//!
//! ## Design Principles
//!
//! 1. **Templates vs. instances**: Card definitions are immutable and shared.
//!    Per-round state lives in explicit instances rebuilt every round.
//!
//! 2. **Explicit state**: Every effect receives `&mut GameState`. There are
//!    no globals; randomness comes from the state's seeded [`GameRng`].
//!
//! 3. **Headless**: Hosts observe events through an [`ActivationSink`]. The
//!    activation log is identical with or without one.
//!
//! ## Example
//!
//! ```
//! use ore_engine::{catalog, run_round, EngineConfig, GameState, Loadout};
//!
//! let loadout = Loadout::new()
//!     .with_upgrader(catalog::flame_thrower())
//!     .with_skill(catalog::rising_flame());
//! let mut state = GameState::new(&EngineConfig::default(), &loadout);
//!
//! let report = run_round(&mut state);
//! assert_eq!(report.final_value, 20.0);
//! ```
//!
//! ## Modules
//!
//! - `core`: State, configuration, RNG, sinks, errors
//! - `ore`: Attributes, reactions, the ore and its value pipeline
//! - `triggers`: Activations and pattern matching
//! - `cards`: Definitions, instances, registry, loadouts, catalog
//! - `effects`: Card effect bodies and the effect contract
//! - `stack`: Cascade resolution
//! - `rules`: The round engine

pub mod cards;
pub mod core;
pub mod effects;
pub mod ore;
pub mod rules;
pub mod stack;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{ActivationSink, ConfigError, EngineConfig, GameRng, GameState, Phase};

pub use crate::ore::{Attribute, Ore, Reaction, ValueChange};

pub use crate::triggers::{Activation, ActivationId, ActivationKind, CardRef, PatternMatcher};

pub use crate::cards::{
    catalog, Archetype, CardInstance, CardRegistry, CardSet, CardSlot, CardTemplate, CardType,
    CharacterDef, CharacterEffect, Loadout, LoadoutSpec, Rarity, SkillDef, SkillEffect, SkillKind,
    UpgraderDef,
};

pub use crate::effects::{EffectOutcome, EffectResolver};

pub use crate::stack::{handle_new_triggers, CascadeOverflow, CascadeResolver};

pub use crate::rules::{run_round, RoundEngine, RoundReport};
