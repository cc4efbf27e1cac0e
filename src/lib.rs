//! Monte Carlo simulators for two mobile-game reward mechanics: card packs bought with a
//! coin budget, and a dice-driven board loop.

pub mod board;
pub mod cards;
pub mod cli;
pub mod parallel;
pub mod report;
pub mod sampler;

/// Seed both simulators use unless told otherwise.
pub const DEFAULT_SEED: u64 = 100;
