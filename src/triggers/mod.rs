//! Activations and trigger matching.
//!
//! ## Key Components
//!
//! - [`Activation`]: Event record and trigger pattern, one shape for both
//! - [`ActivationKind`]: What happened (attribute added, reaction, ...)
//! - [`CardRef`]: The card instance that caused an event
//! - [`PatternMatcher`]: Containment matching of patterns against events

mod condition;
mod event;

pub use condition::PatternMatcher;
pub use event::{Activation, ActivationId, ActivationKind, CardRef, ReactionPair};
