//! Events reported by the game engine.
//!
//! Every event renders, through [`Display`](core::fmt::Display), as the exact
//! text the console prints for it.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Joined};
use crate::player::Side;
use crate::result::Score;

/// Something that happened during the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The cards put face up before the first turn.
    InitialTable(Vec<Card>),
    /// Table status at the start of a turn.
    TableStatus {
        /// Cards on the table.
        len: usize,
        /// The top card, if any.
        top: Option<Card>,
    },
    /// The active side's hand before it picks a card.
    HandShown {
        /// Whose hand it is.
        side: Side,
        /// The cards, in hand order.
        cards: Vec<Card>,
    },
    /// A side played a card.
    CardPlayed {
        /// Who played.
        side: Side,
        /// The card played.
        card: Card,
    },
    /// A side took the table.
    Captured {
        /// Who captured.
        side: Side,
        /// Cards taken, the played card included.
        cards: usize,
    },
    /// Score after a capture, without the most-cards bonus.
    Score(Score),
    /// Blank line between turns.
    Separator,
    /// Final score, bonus included.
    FinalScore(Score),
    /// The game is over, finished or aborted.
    GameOver,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InitialTable(cards) => {
                write!(f, "Initial cards on the table: {}", Joined(cards))
            }
            Self::TableStatus { len, top: Some(top) } => {
                write!(f, "{len} cards on the table, and the top card is {top}")
            }
            Self::TableStatus { top: None, .. } => f.write_str("No cards on the table"),
            Self::HandShown {
                side: Side::Player,
                cards,
            } => {
                f.write_str("Cards in hand: ")?;
                for (index, card) in cards.iter().enumerate() {
                    write!(f, "{}){card} ", index + 1)?;
                }
                Ok(())
            }
            Self::HandShown {
                side: Side::Computer,
                cards,
            } => write!(f, "{}", Joined(cards)),
            Self::CardPlayed { side, card } => write!(f, "{side} plays {card}"),
            Self::Captured { side, .. } => write!(f, "{side} wins cards"),
            Self::Score(score) | Self::FinalScore(score) => write!(f, "{score}"),
            Self::Separator => Ok(()),
            Self::GameOver => f.write_str("Game Over"),
        }
    }
}

/// Receives the events of a game as they happen.
pub trait Observer {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &GameEvent);
}

impl Observer for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}

impl Observer for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}
