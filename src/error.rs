//! Error types for game operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when building a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
}

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck: needed {needed}, available {available}")]
    NotEnoughCards {
        /// Cards required for the opening deal.
        needed: usize,
        /// Cards the deck actually holds.
        available: usize,
    },
}

/// Errors that can occur while playing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The game has already ended.
    #[error("invalid game state for this turn")]
    InvalidState,
    /// The chosen card index is not in the hand.
    #[error("card index {index} is out of range for a hand of {len}")]
    CardOutOfRange {
        /// The 0-based index that was requested.
        index: usize,
        /// Number of cards in the hand.
        len: usize,
    },
}
