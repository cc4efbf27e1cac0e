use std::fmt;

use chrono::{DateTime, Local, TimeZone};

use crate::board::{self, BoardSimConfig};
use crate::cards::{self, CardSimConfig};
use crate::report::{format_board_report, format_card_report};

pub const CARDS_USAGE: &str = "usage: bunny";
pub const DICE_USAGE: &str = "usage: dice-run [num of iterate]";
pub const DISPATCH_USAGE: &str = "usage: rewardsim <cards|dice> [num of iterate]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cards,
    Dice,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("cards") => Some(Command::Cards),
        Some("dice") => Some(Command::Dice),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    MissingIterations,
    UnexpectedArguments(usize),
    InvalidIterations(String),
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingIterations => write!(f, "missing iteration count"),
            Self::UnexpectedArguments(n) => write!(f, "expected one argument, got {n}"),
            Self::InvalidIterations(raw) => write!(f, "invalid iteration count '{raw}'"),
        }
    }
}

impl std::error::Error for UsageError {}

/// Parses an iteration count, ignoring comma digit separators (`1,000,000`).
/// Negative counts are usage errors rather than zero-tick runs.
pub fn parse_iterations(raw: &str) -> Result<u64, UsageError> {
    raw.replace(',', "")
        .parse::<u64>()
        .map_err(|_| UsageError::InvalidIterations(raw.to_string()))
}

/// Expects exactly one operand: the iteration count.
pub fn iterations_from_operands(operands: &[String]) -> Result<u64, UsageError> {
    match operands {
        [] => Err(UsageError::MissingIterations),
        [raw] => parse_iterations(raw),
        more => Err(UsageError::UnexpectedArguments(more.len())),
    }
}

/// `2024/01/02 03:04:05`, in the timezone `at` carries.
pub fn timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%Y/%m/%d %H:%M:%S").to_string()
}

/// Local-time stamped diagnostic line on stderr. Reports go to stdout.
pub fn log(message: impl fmt::Display) {
    eprintln!("{} {message}", timestamp(&Local::now()));
}

/// Entry point of the `rewardsim` dispatcher. Returns the process exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Cards) if args.len() == 2 => handle_cards(CardSimConfig::default()),
        Some(Command::Cards) => {
            eprintln!("{DISPATCH_USAGE}");
            2
        }
        Some(Command::Dice) => handle_dice(&args[2..]),
        None => {
            eprintln!("{DISPATCH_USAGE}");
            2
        }
    }
}

/// Runs every strategy and returns the concatenated reports, logging each raw result.
pub fn cards_report(config: CardSimConfig) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    for (strategy, result) in cards::simulate_all(config) {
        log(serde_json::to_string(&result)?);
        out.push_str(&format_card_report(strategy, &result));
    }
    Ok(out)
}

pub fn handle_cards(config: CardSimConfig) -> i32 {
    log(format_args!("Num of coins to simulate: {}", config.budget));

    match cards_report(config) {
        Ok(report) => {
            print!("{report}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize simulation result: {err}");
            1
        }
    }
}

/// `operands` are the arguments after the program (or subcommand) name.
pub fn handle_dice(operands: &[String]) -> i32 {
    let iterations = match iterations_from_operands(operands) {
        Ok(n) => n,
        Err(err) => {
            log(&err);
            eprintln!("{DICE_USAGE}");
            return 2;
        }
    };

    log(format_args!("Num of iterate: {iterations}"));
    let status = board::simulate(BoardSimConfig {
        iterations,
        ..BoardSimConfig::default()
    });

    match serde_json::to_string(&status) {
        Ok(raw) => log(format_args!("Status: {raw}")),
        Err(err) => {
            eprintln!("failed to serialize board status: {err}");
            return 1;
        }
    }
    print!("{}", format_board_report(&status, iterations));

    0
}
