//! Game state for one player's round.
//!
//! ## GameState
//!
//! Everything a round reads and mutates:
//! - The ore
//! - Upgrader and skill slots in list order, plus the optional character
//! - Phase, activation id counter and the activation log
//! - RNG, optional activation sink and cascade depth bookkeeping
//!
//! Card effects and the resolver receive `&mut GameState` explicitly; there
//! is no global state.

use tracing::trace;

use super::config::{EngineConfig, Phase};
use super::rng::GameRng;
use super::sink::ActivationSink;
use crate::cards::{CardInstance, CardSlot, CharacterDef, Loadout, SkillDef, UpgraderDef};
use crate::ore::Ore;
use crate::stack::CascadeOverflow;
use crate::triggers::{Activation, ActivationId};

/// Complete state of a round.
pub struct GameState {
    /// The ore being refined.
    pub ore: Ore,

    /// Upgraders in processing order.
    pub upgraders: Vec<CardSlot<UpgraderDef>>,

    /// Skills in resolution order.
    pub skills: Vec<CardSlot<SkillDef>>,

    /// The character, if any. Its instance persists across rounds.
    pub character: Option<CardSlot<CharacterDef>>,

    /// Current phase.
    pub phase: Phase,

    /// RNG for random skill effects.
    pub rng: GameRng,

    /// Emit resolver queue dumps at trace level.
    pub debug: bool,

    next_activation_id: u64,
    log: Vec<Activation>,
    sink: Option<Box<dyn ActivationSink>>,
    max_cascade_depth: usize,
    cascade_depth: usize,
    overflow: Option<CascadeOverflow>,
}

impl GameState {
    /// Create a state for `loadout` with a fresh ore from `config`.
    #[must_use]
    pub fn new(config: &EngineConfig, loadout: &Loadout) -> Self {
        let upgraders = loadout
            .upgraders
            .iter()
            .enumerate()
            .map(|(i, def)| CardSlot::new(def.clone(), i))
            .collect();
        let skills = loadout
            .skills
            .iter()
            .enumerate()
            .map(|(i, def)| CardSlot::new(def.clone(), i))
            .collect();
        let character = loadout
            .character
            .as_ref()
            .map(|def| CardSlot::new(def.clone(), 0));

        Self {
            ore: Ore::new(config.ore_name.clone(), config.base_value),
            upgraders,
            skills,
            character,
            phase: Phase::Main,
            rng: GameRng::new(config.seed),
            debug: config.debug,
            next_activation_id: 1,
            log: Vec::new(),
            sink: None,
            max_cascade_depth: config.max_cascade_depth,
            cascade_depth: 0,
            overflow: None,
        }
    }

    /// Replace the ore (builder pattern).
    #[must_use]
    pub fn with_ore(mut self, ore: Ore) -> Self {
        self.ore = ore;
        self
    }

    /// Attach an activation sink (builder pattern).
    #[must_use]
    pub fn with_sink(mut self, sink: impl ActivationSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Attach or detach the activation sink.
    pub fn set_sink(&mut self, sink: Option<Box<dyn ActivationSink>>) {
        self.sink = sink;
    }

    /// Activations emitted since the round started.
    #[must_use]
    pub fn activation_log(&self) -> &[Activation] {
        &self.log
    }

    /// First skill slot named `name`.
    #[must_use]
    pub fn skill(&self, name: &str) -> Option<&CardSlot<SkillDef>> {
        self.skills.iter().find(|slot| slot.def.name == name)
    }

    /// Stamp `activation` with the next id, log it, and hand it to the sink.
    ///
    /// Returns the stamped activation for the caller's output buffer.
    pub(crate) fn emit(&mut self, mut activation: Activation) -> Activation {
        activation.id = Some(ActivationId::new(self.next_activation_id));
        self.next_activation_id += 1;
        if self.debug {
            trace!(%activation, "emit");
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.on_activation(&activation);
        }
        self.log.push(activation.clone());
        activation
    }

    /// Fresh upgrader and skill instances; clear the character's consumed ids.
    pub(crate) fn begin_round(&mut self) {
        for (i, slot) in self.upgraders.iter_mut().enumerate() {
            slot.instance = CardInstance::new(i);
        }
        for (i, slot) in self.skills.iter_mut().enumerate() {
            slot.instance = CardInstance::new(i);
        }
        if let Some(character) = self.character.as_mut() {
            character.instance.consumed.clear();
        }
        self.phase = Phase::Main;
        self.log.clear();
        self.cascade_depth = 0;
        self.overflow = None;
    }

    /// Clear per-round skill state. Character stacks persist.
    pub(crate) fn end_round(&mut self) {
        for slot in &mut self.skills {
            slot.instance.reset();
        }
        if let Some(character) = self.character.as_mut() {
            character.instance.consumed.clear();
        }
    }

    pub(crate) fn take_log(&mut self) -> Vec<Activation> {
        std::mem::take(&mut self.log)
    }

    pub(crate) fn take_overflow(&mut self) -> Option<CascadeOverflow> {
        self.overflow.take()
    }

    /// Enter one cascade level. Returns false once the limit is reached.
    pub(crate) fn enter_cascade(&mut self) -> bool {
        if self.cascade_depth >= self.max_cascade_depth {
            return false;
        }
        self.cascade_depth += 1;
        true
    }

    pub(crate) fn exit_cascade(&mut self) {
        self.cascade_depth = self.cascade_depth.saturating_sub(1);
    }

    /// Record activations that were dropped at the depth limit.
    pub(crate) fn record_overflow(&mut self, dropped: usize) {
        let max_depth = self.max_cascade_depth;
        self.overflow
            .get_or_insert(CascadeOverflow {
                max_depth,
                dropped: 0,
            })
            .dropped += dropped;
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("ore", &self.ore)
            .field("upgraders", &self.upgraders.len())
            .field("skills", &self.skills.len())
            .field("character", &self.character.as_ref().map(|c| &c.def.name))
            .field("phase", &self.phase)
            .field("next_activation_id", &self.next_activation_id)
            .field("cascade_depth", &self.cascade_depth)
            .finish_non_exhaustive()
    }
}
