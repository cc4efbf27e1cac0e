use crate::cards::SimulationResult;
use crate::sampler::{draw_batch, Batch, CardType, ProbabilityTable, Rng, BATCH_SIZE};

/// Per-position prices when every card of a batch is opened, in reveal order.
pub const OPEN_ALL_PRICES: [u64; BATCH_SIZE] = [200, 210, 220, 230];
/// Flat price of the single card kept per shuffle.
pub const SINGLE_CARD_PRICE: u64 = 200;
pub const REVEAL_BASE_PRICE: u64 = 200;
pub const REVEAL_PRICE_STEP: u64 = 10;

/// Price of the `position`-th reveal (0-based) within one batch.
#[inline]
pub const fn reveal_price(position: usize) -> u64 {
    REVEAL_BASE_PRICE + REVEAL_PRICE_STEP * position as u64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Open all four cards of every batch.
    OpenAll,
    /// Reshuffle after every card; only one random card per batch is kept.
    ShuffleEveryCard,
    /// Reveal cards in random order and reshuffle as soon as an SR or UR shows up.
    ShuffleUntilRare,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Self::OpenAll,
        Self::ShuffleEveryCard,
        Self::ShuffleUntilRare,
    ];

    pub const fn description(self) -> &'static str {
        match self {
            Self::OpenAll => "Open All Cards",
            Self::ShuffleEveryCard => "Shuffle every card",
            Self::ShuffleUntilRare => "Shuffle when opened SR or UR",
        }
    }

    /// Largest charge a single loop iteration can add; bounds the budget overshoot.
    pub fn max_tick_cost(self) -> u64 {
        match self {
            Self::OpenAll => OPEN_ALL_PRICES.iter().sum(),
            Self::ShuffleEveryCard => SINGLE_CARD_PRICE,
            Self::ShuffleUntilRare => (0..BATCH_SIZE).map(reveal_price).sum(),
        }
    }

    /// Spends `budget` coins. Stops on the first iteration that leaves
    /// `consumed_coins >= budget`.
    pub fn simulate(
        self,
        budget: u64,
        table: &ProbabilityTable,
        rng: &mut Rng,
    ) -> SimulationResult {
        let mut result = SimulationResult::new();
        let mut batch: Batch = [CardType::Normal; BATCH_SIZE];

        while result.consumed_coins < budget {
            draw_batch(rng, table, &mut batch);
            match self {
                Self::OpenAll => open_all(&batch, &mut result),
                Self::ShuffleEveryCard => keep_one(&batch, &mut result, rng),
                Self::ShuffleUntilRare => reveal_until_rare(&batch, &mut result, rng),
            }
            result.shuffled += 1;
        }

        result
    }
}

fn open_all(batch: &Batch, result: &mut SimulationResult) {
    for (card, price) in batch.iter().zip(OPEN_ALL_PRICES) {
        result.record(*card);
        result.consumed_coins += price;
    }
}

fn keep_one(batch: &Batch, result: &mut SimulationResult, rng: &mut Rng) {
    let kept = batch[rng.below(BATCH_SIZE)];
    result.record(kept);
    result.consumed_coins += SINGLE_CARD_PRICE;
}

fn reveal_until_rare(batch: &Batch, result: &mut SimulationResult, rng: &mut Rng) {
    let mut revealed = [false; BATCH_SIZE];
    for position in 0..BATCH_SIZE {
        let slot = loop {
            let candidate = rng.below(BATCH_SIZE);
            if !revealed[candidate] {
                break candidate;
            }
        };
        revealed[slot] = true;

        let card = batch[slot];
        result.record(card);
        result.consumed_coins += reveal_price(position);
        if card.is_guaranteed_tier() {
            break;
        }
    }
}
