//! Card-pack simulator: runs every opening strategy against the default coin budget.
//!
//! Usage:
//!   cargo run --release --bin bunny

use std::env;
use std::process;

use rewardsim::cards::CardSimConfig;
use rewardsim::cli;

fn main() {
    if env::args().len() > 1 {
        eprintln!("{}", cli::CARDS_USAGE);
        process::exit(2);
    }
    process::exit(cli::handle_cards(CardSimConfig::default()));
}
