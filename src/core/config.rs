//! Engine configuration types.
//!
//! - `EngineConfig`: ore, cascade limit, seed and debug tracing
//! - `Phase`: the two round phases
//!
//! Card definitions are configured separately through
//! [`CardRegistry`](crate::cards::CardRegistry).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Round phase.
///
/// Static skills accumulate while the phase is `Main` and pay off when they
/// are invoked during `End`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Main,
    End,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Main => "MAIN",
            Phase::End => "END",
        })
    }
}

/// Engine configuration.
///
/// Missing fields fall back to [`EngineConfig::default`] when loading JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Display name of the ore.
    pub ore_name: String,

    /// Value the ore starts each round with.
    pub base_value: f64,

    /// Maximum nesting of cascade resolution before further queues are dropped.
    pub max_cascade_depth: usize,

    /// Seed for random skill effects.
    pub seed: u64,

    /// Emit resolver queue dumps at trace level.
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ore_name: "Test Ore".to_string(),
            base_value: 5.0,
            max_cascade_depth: 64,
            seed: 0,
            debug: false,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_ore_name(mut self, name: impl Into<String>) -> Self {
        self.ore_name = name.into();
        self
    }

    #[must_use]
    pub fn with_base_value(mut self, value: f64) -> Self {
        self.base_value = value;
        self
    }

    #[must_use]
    pub fn with_max_cascade_depth(mut self, depth: usize) -> Self {
        self.max_cascade_depth = depth;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
