use std::collections::BTreeMap;

use serde::Serialize;

use crate::sampler::CardType;

/// Tally of one strategy run. `cards` omits tiers that never came up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationResult {
    pub consumed_coins: u64,
    pub opened_cards: u64,
    pub shuffled: u64,
    pub cards: BTreeMap<CardType, u64>,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, card: CardType) {
        *self.cards.entry(card).or_insert(0) += 1;
        self.opened_cards += 1;
    }

    pub fn count(&self, card: CardType) -> u64 {
        self.cards.get(&card).copied().unwrap_or(0)
    }

    pub fn total_cards(&self) -> u64 {
        self.cards.values().sum()
    }

    /// Fraction of tallied cards in `card`'s tier; 0.0 for an empty tally.
    pub fn share(&self, card: CardType) -> f64 {
        let total = self.total_cards();
        if total == 0 {
            0.0
        } else {
            self.count(card) as f64 / total as f64
        }
    }
}
