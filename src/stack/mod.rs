//! Cascade resolution system.
//!
//! Effects resolve immediately as they happen: every batch of activations a
//! card produces is matched against the other cards' triggers, and whatever
//! those cards produce is resolved depth-first before control returns.
//!
//! ## Example Usage
//!
//! ```
//! use ore_engine::cards::{catalog, Loadout};
//! use ore_engine::core::{EngineConfig, GameState};
//! use ore_engine::ore::Reaction;
//! use ore_engine::stack::CascadeResolver;
//! use ore_engine::triggers::{Activation, ActivationId};
//!
//! let loadout = Loadout::new().with_character(catalog::witch());
//! let mut state = GameState::new(&EngineConfig::default(), &loadout);
//!
//! let reaction = Activation::reaction_triggered()
//!     .with_reaction(Reaction::Melt)
//!     .with_id(ActivationId::new(1));
//! let survivors = CascadeResolver::handle_new_triggers(&mut state, vec![reaction]);
//!
//! assert_eq!(survivors.len(), 1);
//! assert_eq!(state.ore.value(), 105.0);
//! ```

mod cascade;

pub use cascade::{handle_new_triggers, CascadeOverflow, CascadeResolver};
