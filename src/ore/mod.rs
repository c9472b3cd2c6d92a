//! The ore and its attribute chemistry.
//!
//! ## Key Components
//!
//! - [`Attribute`] / [`Reaction`]: Elemental tags and the directional chart
//! - [`Ore`]: Value plus ordered attribute multiset
//! - [`ValueChange`]: Additive or multiplicative change
//! - `pipeline`: Value changes, attribute add/remove and reactions, run
//!   against a [`GameState`](crate::core::GameState)

mod attribute;
mod pipeline;
mod resource;

pub use attribute::{Attribute, Reaction};
pub use resource::{Ore, ValueChange};
