//! Weighted card draws, including the guaranteed SR-or-better slot of each batch.

pub mod rng;
pub mod table;

pub use rng::Rng;
pub use table::{CardType, ProbabilityTable, TableError, STANDARD_THRESHOLDS};

/// Cards produced together by one pack shuffle.
pub const BATCH_SIZE: usize = 4;

pub type Batch = [CardType; BATCH_SIZE];

/// One unconstrained draw.
#[inline]
pub fn draw(rng: &mut Rng, table: &ProbabilityTable) -> CardType {
    table.lookup(rng.next_f64())
}

/// Redraws until `accept` holds. Rejection keeps the table's relative odds inside the
/// accepted subset. Loops forever if the table assigns the subset no mass.
#[inline]
pub fn draw_where<F>(rng: &mut Rng, table: &ProbabilityTable, accept: F) -> CardType
where
    F: Fn(CardType) -> bool,
{
    loop {
        let card = draw(rng, table);
        if accept(card) {
            return card;
        }
    }
}

/// Fills `batch` with four cards. One slot, picked uniformly before any card is drawn,
/// is forced into SR/UR; the other slots draw freely, so a batch holds at least one SR/UR.
/// Returns the forced slot index.
pub fn draw_batch(rng: &mut Rng, table: &ProbabilityTable, batch: &mut Batch) -> usize {
    let guaranteed = rng.below(BATCH_SIZE);
    for (slot, card) in batch.iter_mut().enumerate() {
        *card = if slot == guaranteed {
            draw_where(rng, table, CardType::is_guaranteed_tier)
        } else {
            draw(rng, table)
        };
    }
    guaranteed
}
