//! Card system.
//!
//! ## Key Components
//!
//! - [`UpgraderDef`], [`SkillDef`], [`CharacterDef`]: Immutable templates
//! - [`CardInstance`] / [`CardSlot`]: Per-round mutable state next to its template
//! - [`CardRegistry`]: Name lookup, JSON loading and validation
//! - [`Loadout`]: The ordered cards used in a round
//! - [`catalog`]: The standard cards

pub mod catalog;
mod definition;
mod instance;
mod loadout;
mod registry;

pub use definition::{
    Archetype, CardTemplate, CardType, CharacterDef, CharacterEffect, Rarity, SkillDef,
    SkillEffect, SkillKind, UpgraderDef,
};
pub use instance::{CardInstance, CardSlot};
pub use loadout::{Loadout, LoadoutSpec};
pub use registry::{validate_character, validate_skill, validate_upgrader, CardRegistry, CardSet};
