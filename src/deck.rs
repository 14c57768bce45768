//! The shuffled draw pile.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::error::DeckError;

/// The draw pile. Cards leave from the front and never come back.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full 52-card deck shuffled with `rng`.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = full_deck();
        cards.shuffle(rng);
        Self {
            cards: cards.into(),
        }
    }

    /// Creates a stacked deck. The first card of `cards` is drawn first.
    ///
    /// # Errors
    ///
    /// Returns an error if a card occurs more than once.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_cards(vec![
    ///     Card::new(Suit::Hearts, Rank::Ace),
    ///     Card::new(Suit::Clubs, Rank::Two),
    /// ])
    /// .unwrap();
    /// assert_eq!(deck.pop(), Some(Card::new(Suit::Hearts, Rank::Ace)));
    /// assert_eq!(deck.len(), 1);
    /// ```
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = &mut seen[card.suit.index() * 13 + card.rank.index()];
            if *slot {
                return Err(DeckError::DuplicateCard(*card));
            }
            *slot = true;
        }

        Ok(Self {
            cards: cards.into(),
        })
    }

    /// Removes and returns the front card, or `None` if the deck is empty.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Draws up to `count` cards from the front.
    pub(crate) fn draw(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, front first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
