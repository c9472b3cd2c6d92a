//! Round rules.

mod engine;

pub use engine::{run_round, RoundEngine, RoundReport};
