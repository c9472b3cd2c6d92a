//! Card effects.
//!
//! ## Key Components
//!
//! - [`EffectResolver`]: Upgrader processing and the shared skill/character contract
//! - [`EffectOutcome`]: Whether a body fired
//! - [`passive_modifier`]: Value rescaling by active passive skills

mod characters;
mod resolver;
mod skills;

pub use resolver::{EffectOutcome, EffectResolver};
pub use skills::passive_modifier;
