//! Core engine types: state, configuration, RNG, sinks and errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod sink;
pub mod state;

pub use config::{EngineConfig, Phase};
pub use error::ConfigError;
pub use rng::GameRng;
pub use sink::ActivationSink;
pub use state::GameState;
