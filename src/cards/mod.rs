//! Card-pack simulator: spends a coin budget under one of three opening strategies.

pub mod result;
pub mod strategy;

pub use result::SimulationResult;
pub use strategy::{
    reveal_price, Strategy, OPEN_ALL_PRICES, REVEAL_BASE_PRICE, REVEAL_PRICE_STEP,
    SINGLE_CARD_PRICE,
};

use crate::sampler::{ProbabilityTable, Rng};
use crate::DEFAULT_SEED;

pub const DEFAULT_BUDGET: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSimConfig {
    pub budget: u64,
    pub seed: u64,
}

impl Default for CardSimConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            seed: DEFAULT_SEED,
        }
    }
}

/// Runs every strategy in [Strategy::ALL] order on one generator seeded once, so each
/// strategy continues the sequence the previous one left off.
pub fn simulate_all(config: CardSimConfig) -> Vec<(Strategy, SimulationResult)> {
    let table = ProbabilityTable::standard();
    let mut rng = Rng::new(config.seed);
    Strategy::ALL
        .into_iter()
        .map(|strategy| (strategy, strategy.simulate(config.budget, &table, &mut rng)))
        .collect()
}
