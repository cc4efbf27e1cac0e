use serde::Serialize;

/// Token position and everything collected along the way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    pub square_index: usize,
    pub laps: u64,
    pub pieces: u64,
    pub bonus_pieces: u64,
    pub enhancement_stones: u64,
    pub reports: u64,
    pub credits_k: u64,
}

/// Reported counters, in report order. Excludes `square_index`.
pub const COUNTER_NAMES: [&str; 6] = [
    "Laps",
    "Pieces",
    "BonusPieces",
    "EnhancementStones",
    "Reports",
    "CreditsK",
];

impl Status {
    /// `(name, total)` for every reported counter, matching [COUNTER_NAMES].
    pub fn counters(&self) -> [(&'static str, u64); 6] {
        [
            (COUNTER_NAMES[0], self.laps),
            (COUNTER_NAMES[1], self.pieces),
            (COUNTER_NAMES[2], self.bonus_pieces),
            (COUNTER_NAMES[3], self.enhancement_stones),
            (COUNTER_NAMES[4], self.reports),
            (COUNTER_NAMES[5], self.credits_k),
        ]
    }
}
