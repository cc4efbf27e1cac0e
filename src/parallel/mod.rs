pub mod batch;
pub mod pool;

pub use batch::{replica_seed, run_board_replicas, run_strategies_parallel};
pub use pool::WorkerPool;
