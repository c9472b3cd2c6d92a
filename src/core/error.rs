//! Configuration errors.
//!
//! Rounds never fail. Everything that can go wrong is caught when cards and
//! loadouts are loaded.

use thiserror::Error;

use crate::cards::{CardType, SkillEffect, SkillKind};

/// Error raised while loading or validating card configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown {card_type} card: {name}")]
    UnknownCard { card_type: CardType, name: String },

    #[error("card name already registered: {name}")]
    DuplicateCard { name: String },

    #[error("skill {name} is declared {declared:?} but {effect:?} is a {expected:?} effect")]
    KindMismatch {
        name: String,
        effect: SkillEffect,
        declared: SkillKind,
        expected: SkillKind,
    },

    #[error("{name} pays off at max_stacks, which must be at least 1")]
    ZeroMaxStacks { name: String },

    #[error("upgrader {name} leaves the ore value unchanged")]
    DegenerateUpgrader { name: String },

    #[error("malformed card configuration: {0}")]
    Json(#[from] serde_json::Error),
}
