use crate::board::Status;

/// What landing on a square does. Each effect only touches the traveling [Status].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareEffect {
    Nothing,
    Pieces(u64),
    BonusPieces(u64),
    EnhancementStones(u64),
    Reports(u64),
    CreditsK(u64),
    /// Moves the token further; the board re-reduces the index afterwards.
    Advance(usize),
}

impl SquareEffect {
    #[inline]
    pub fn apply(self, status: &mut Status) {
        match self {
            Self::Nothing => {}
            Self::Pieces(n) => status.pieces += n,
            Self::BonusPieces(n) => status.bonus_pieces += n,
            Self::EnhancementStones(n) => status.enhancement_stones += n,
            Self::Reports(n) => status.reports += n,
            Self::CreditsK(n) => status.credits_k += n,
            Self::Advance(steps) => status.square_index += steps,
        }
    }
}

/// The 18-square event board, starting square first.
pub const STANDARD_SQUARES: [SquareEffect; 18] = [
    SquareEffect::Nothing,
    SquareEffect::Pieces(1),
    SquareEffect::EnhancementStones(6),
    SquareEffect::Reports(6),
    SquareEffect::Advance(3),
    SquareEffect::CreditsK(800),
    SquareEffect::Pieces(1),
    SquareEffect::CreditsK(500),
    SquareEffect::EnhancementStones(6),
    SquareEffect::CreditsK(1200),
    SquareEffect::Advance(1),
    SquareEffect::Reports(4),
    SquareEffect::Pieces(1),
    SquareEffect::Reports(2),
    SquareEffect::EnhancementStones(2),
    SquareEffect::BonusPieces(3),
    SquareEffect::Advance(2),
    SquareEffect::BonusPieces(2),
];
