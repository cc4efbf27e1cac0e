//! Dice-loop board simulator.
//!
//! A token walks a circular board with a d6. Each tick moves it, applies the landing
//! square's effect (which may move it again), wraps the index, and counts a lap whenever
//! the index ends up lower than where the tick started. After the last tick every lap
//! also awards one bonus piece.

pub mod square;
pub mod status;

use std::fmt;

pub use square::{SquareEffect, STANDARD_SQUARES};
pub use status::{Status, COUNTER_NAMES};

use crate::sampler::Rng;
use crate::DEFAULT_SEED;

pub const DIE_FACES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSimConfig {
    pub iterations: u64,
    pub seed: u64,
}

impl Default for BoardSimConfig {
    fn default() -> Self {
        Self {
            iterations: 0,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Empty,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "board needs at least one square"),
        }
    }
}

impl std::error::Error for BoardError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Vec<SquareEffect>,
}

impl Board {
    pub fn new(squares: Vec<SquareEffect>) -> Result<Self, BoardError> {
        if squares.is_empty() {
            return Err(BoardError::Empty);
        }
        Ok(Self { squares })
    }

    pub fn standard() -> Self {
        Self {
            squares: STANDARD_SQUARES.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Moves `roll` squares and applies the landing square. Returns true when the tick
    /// completed a lap.
    #[inline]
    pub fn tick(&self, status: &mut Status, roll: usize) -> bool {
        let len = self.squares.len();
        let start = status.square_index;

        status.square_index = (start + roll) % len;
        self.squares[status.square_index].apply(status);
        status.square_index %= len;

        let wrapped = status.square_index < start;
        if wrapped {
            status.laps += 1;
        }
        wrapped
    }

    /// Runs `iterations` ticks with rolls drawn from `rng`.
    pub fn run(&self, iterations: u64, rng: &mut Rng) -> Status {
        let mut status = Status::default();
        for _ in 0..iterations {
            let roll = rng.below(DIE_FACES) + 1;
            self.tick(&mut status, roll);
        }
        award_lap_bonus(&mut status);
        status
    }

    /// Same as [Board::run] with a fixed roll sequence; one tick per roll.
    pub fn run_with_rolls<I>(&self, rolls: I) -> Status
    where
        I: IntoIterator<Item = usize>,
    {
        let mut status = Status::default();
        for roll in rolls {
            self.tick(&mut status, roll);
        }
        award_lap_bonus(&mut status);
        status
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

fn award_lap_bonus(status: &mut Status) {
    status.bonus_pieces += status.laps;
}

/// Runs the standard board for `config.iterations` ticks from `config.seed`.
pub fn simulate(config: BoardSimConfig) -> Status {
    let mut rng = Rng::new(config.seed);
    Board::standard().run(config.iterations, &mut rng)
}
