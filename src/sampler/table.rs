use std::fmt;

use serde::Serialize;

/// Card rarity tiers, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum CardType {
    #[serde(rename = "N")]
    Normal,
    #[serde(rename = "R")]
    Rare,
    #[serde(rename = "SR")]
    SuperRare,
    #[serde(rename = "UR")]
    UltraRare,
}

impl CardType {
    pub const ALL: [CardType; 4] = [
        Self::Normal,
        Self::Rare,
        Self::SuperRare,
        Self::UltraRare,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::Rare => "R",
            Self::SuperRare => "SR",
            Self::UltraRare => "UR",
        }
    }

    /// SR or better; the tier every batch guarantees at least once.
    pub const fn is_guaranteed_tier(self) -> bool {
        matches!(self, Self::SuperRare | Self::UltraRare)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Standard pack odds as cumulative thresholds: N 40%, R 30%, SR 23.5%, UR 6.5%.
pub const STANDARD_THRESHOLDS: [(f64, CardType); 4] = [
    (0.4, CardType::Normal),
    (0.7, CardType::Rare),
    (0.935, CardType::SuperRare),
    (1.0, CardType::UltraRare),
];

#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    Empty,
    OutOfRange { index: usize, threshold: f64 },
    NotIncreasing { index: usize, previous: f64, threshold: f64 },
    Incomplete { last: f64 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "probability table has no entries"),
            Self::OutOfRange { index, threshold } => {
                write!(f, "threshold {threshold} at entry {index} is outside (0, 1]")
            }
            Self::NotIncreasing {
                index,
                previous,
                threshold,
            } => write!(
                f,
                "threshold {threshold} at entry {index} does not exceed previous {previous}"
            ),
            Self::Incomplete { last } => {
                write!(f, "last threshold is {last}, table must end at 1.0")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Cumulative-threshold table covering [0, 1) without gaps or overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityTable {
    entries: Vec<(f64, CardType)>,
}

impl ProbabilityTable {
    pub fn new(entries: Vec<(f64, CardType)>) -> Result<Self, TableError> {
        let mut previous = 0.0;
        for (index, &(threshold, _)) in entries.iter().enumerate() {
            if !(threshold > 0.0 && threshold <= 1.0) {
                return Err(TableError::OutOfRange { index, threshold });
            }
            if index > 0 && threshold <= previous {
                return Err(TableError::NotIncreasing {
                    index,
                    previous,
                    threshold,
                });
            }
            previous = threshold;
        }
        match entries.last() {
            None => Err(TableError::Empty),
            Some(&(last, _)) if last != 1.0 => Err(TableError::Incomplete { last }),
            Some(_) => Ok(Self { entries }),
        }
    }

    pub fn standard() -> Self {
        Self {
            entries: STANDARD_THRESHOLDS.to_vec(),
        }
    }

    /// Outcome of the first segment whose threshold exceeds `u`.
    ///
    /// # Panics
    /// If `u` is not covered by the table (`u >= 1.0` or NaN).
    #[inline]
    pub fn lookup(&self, u: f64) -> CardType {
        match self.entries.iter().find(|(threshold, _)| u < *threshold) {
            Some(&(_, card)) => card,
            None => panic!("probability table does not cover {u}"),
        }
    }

    /// Probability mass assigned to `card`.
    pub fn weight(&self, card: CardType) -> f64 {
        let mut previous = 0.0;
        let mut mass = 0.0;
        for &(threshold, entry) in &self.entries {
            if entry == card {
                mass += threshold - previous;
            }
            previous = threshold;
        }
        mass
    }
}

impl Default for ProbabilityTable {
    fn default() -> Self {
        Self::standard()
    }
}
