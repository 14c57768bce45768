//! The face-up pile in the middle of the table.

use alloc::vec::Vec;
use core::mem;

use crate::card::Card;

/// Number of cards put face up before the first turn.
pub const INITIAL_TABLE_SIZE: usize = 4;

/// Face-up cards on the table. The last card added is the top card.
#[derive(Debug, Clone, Default)]
pub struct Table {
    cards: Vec<Card>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Puts a card on top of the pile.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Takes every card off the table, bottom card first.
    pub fn clear(&mut self) -> Vec<Card> {
        mem::take(&mut self.cards)
    }

    /// Returns the cards on the table, bottom card first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
