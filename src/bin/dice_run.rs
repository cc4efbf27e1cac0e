//! Board simulator: walks the event board for the given number of dice rolls.
//!
//! Usage:
//!   cargo run --release --bin dice-run -- 1,000,000

use std::env;
use std::process;

use rewardsim::cli;

fn main() {
    let operands: Vec<String> = env::args().skip(1).collect();
    process::exit(cli::handle_dice(&operands));
}
