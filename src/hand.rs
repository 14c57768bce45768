//! A player's hand.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;

/// Number of cards a hand is (re)filled to.
pub const HAND_SIZE: usize = 6;

/// Cards held by one side, in the order they were dealt.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub(crate) const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Draws a full hand from the deck.
    ///
    /// Nothing is drawn unless the deck still holds at least [`HAND_SIZE`]
    /// cards. Returns whether cards were dealt.
    pub fn deal(&mut self, deck: &mut Deck) -> bool {
        if deck.len() < HAND_SIZE {
            return false;
        }

        self.cards.extend(deck.draw(HAND_SIZE));
        true
    }

    /// Removes and returns the card at the 0-based `index`.
    pub fn play(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
