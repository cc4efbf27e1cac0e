//! Independent simulation runs spread across Rayon workers.
//!
//! Every run gets its own [Rng] seeded from the base seed and the run's position, so results
//! depend only on the inputs and never on thread scheduling. Output order matches input order.

use rayon::prelude::*;

use crate::board::{Board, Status};
use crate::cards::{SimulationResult, Strategy};
use crate::parallel::WorkerPool;
use crate::sampler::{ProbabilityTable, Rng};

/// Seed for the `index`-th independent run.
#[inline]
pub fn replica_seed(base_seed: u64, index: usize) -> u64 {
    base_seed.wrapping_add(index as u64)
}

/// Runs each strategy on its own generator. Unlike [crate::cards::simulate_all], strategies
/// do not share one sequence.
pub fn run_strategies_parallel(
    budget: u64,
    base_seed: u64,
    pool: &WorkerPool,
) -> Vec<(Strategy, SimulationResult)> {
    let table = ProbabilityTable::standard();
    pool.install(|| {
        Strategy::ALL
            .par_iter()
            .enumerate()
            .map(|(index, &strategy)| {
                let mut rng = Rng::new(replica_seed(base_seed, index));
                (strategy, strategy.simulate(budget, &table, &mut rng))
            })
            .collect()
    })
}

/// Runs `replicas` independent walks of `iterations` ticks each.
pub fn run_board_replicas(
    board: &Board,
    iterations: u64,
    replicas: usize,
    base_seed: u64,
    pool: &WorkerPool,
) -> Vec<Status> {
    pool.install(|| {
        (0..replicas)
            .into_par_iter()
            .map(|replica| {
                let mut rng = Rng::new(replica_seed(base_seed, replica));
                board.run(iterations, &mut rng)
            })
            .collect()
    })
}
