//! The Indigo card game engine with optional `no_std` support.
//!
//! Two sides, the human and the computer, take turns playing cards onto a
//! face-up table. A card sharing rank or suit with the top card captures the
//! whole table. Aces, tens and face cards are worth a point each, and the
//! side with the most captured cards earns a bonus at the end.
//!
//! The crate provides a [`Game`] type that owns the deck, the table and both
//! sides, and asks a [`MoveSource`] for each move. [`ComputerStrategy`] is the
//! computer's heuristic; the human's moves come from whatever drives the game.
//!
//! # Example
//!
//! ```
//! use indigo::{ComputerStrategy, Game, GameEvent, GameState, Side};
//!
//! let mut game = Game::new(Side::Computer, 7);
//! let mut human = ComputerStrategy::new();
//! let mut computer = ComputerStrategy::new();
//! let mut events: Vec<GameEvent> = Vec::new();
//!
//! let state = game.run(&mut human, &mut computer, &mut events).unwrap();
//! assert_eq!(state, GameState::RoundEnded);
//! assert_eq!(events.last(), Some(&GameEvent::GameOver));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod command;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod pile;
pub mod player;
pub mod result;
pub mod strategy;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, full_deck};
pub use command::{Command, parse_yes_no};
pub use deck::Deck;
pub use error::{DealError, DeckError, TurnError};
pub use event::{GameEvent, Observer};
pub use game::{Game, GameState, OPENING_DEAL};
pub use hand::{HAND_SIZE, Hand};
pub use pile::WinPile;
pub use player::{MOST_CARDS_BONUS, Player, Side, has_most_cards, score};
pub use result::{PlayOutcome, Score};
pub use strategy::{ComputerStrategy, Move, MoveSource, TurnView, select_card};
pub use table::{INITIAL_TABLE_SIZE, Table};
