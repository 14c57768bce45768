//! Cards won by a player.

use alloc::vec::Vec;

use crate::card::Card;

/// Captured cards. Only the count and the point total matter.
#[derive(Debug, Clone, Default)]
pub struct WinPile {
    cards: Vec<Card>,
}

impl WinPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a single captured card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Adds every captured card.
    pub fn add_all<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Sums the points of the captured cards.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|card| card.points()).sum()
    }

    /// Returns the captured cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of captured cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether nothing was captured yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
