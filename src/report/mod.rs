//! Human-readable reports for both simulators.

pub mod summary;

use std::fmt::Write as _;

use crate::board::Status;
use crate::cards::{SimulationResult, Strategy};
use crate::sampler::CardType;

pub use summary::{CounterSummary, ReplicaSummary};

/// Board rates are reported per this many iterations.
pub const RATE_SCALE: u64 = 10;

/// Strategy description, tier shares, and shuffle count.
pub fn format_card_report(strategy: Strategy, result: &SimulationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", strategy.description());
    for card in CardType::ALL {
        let _ = writeln!(out, "{}: {}", card.label(), result.share(card));
    }
    let _ = writeln!(out, "Shuffled: {}", result.shuffled);
    out
}

/// `total / iterations * RATE_SCALE`; 0.0 when no iterations ran.
pub fn rate_per_scale(total: u64, iterations: u64) -> f64 {
    if iterations == 0 {
        0.0
    } else {
        total as f64 / iterations as f64 * RATE_SCALE as f64
    }
}

/// One line per counter: `Name: 12.3 per 10, (1,234)`.
pub fn format_board_report(status: &Status, iterations: u64) -> String {
    let mut out = String::new();
    for (name, total) in status.counters() {
        let _ = writeln!(
            out,
            "{name}: {:.1} per {RATE_SCALE}, ({})",
            rate_per_scale(total, iterations),
            group_digits(total)
        );
    }
    out
}

/// Formats `value` with a comma between each group of three digits.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
