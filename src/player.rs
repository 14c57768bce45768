//! The two sides of the game and how they are scored.

use core::fmt;

use crate::hand::Hand;
use crate::pile::WinPile;

/// Bonus for capturing the most cards.
pub const MOST_CARDS_BONUS: u32 = 3;

/// One of the two sides at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human at the console.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Self; 2] = [Self::Player, Self::Computer];

    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Computer => "Computer",
        })
    }
}

/// A side's cards: what it holds and what it has won.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Cards in hand.
    pub hand: Hand,
    /// Captured cards.
    pub win_pile: WinPile,
}

impl Player {
    /// Creates a player holding `hand` with nothing captured.
    #[must_use]
    pub const fn new(hand: Hand) -> Self {
        Self {
            hand,
            win_pile: WinPile::new(),
        }
    }
}

/// Computes the score of `side`.
///
/// Without `initial_player` this is just the point total of the side's win
/// pile. With it, the side capturing strictly more cards gets
/// [`MOST_CARDS_BONUS`] on top, and a tie in card count goes to
/// `initial_player`.
#[must_use]
pub fn score(side: Side, players: &[Player; 2], initial_player: Option<Side>) -> u32 {
    let own = &players[side.index()].win_pile;
    let mut score = own.points();

    if initial_player.is_some_and(|initial| has_most_cards(side, players, initial)) {
        score += MOST_CARDS_BONUS;
    }

    score
}

/// Returns whether `side` earns the most-cards bonus.
#[must_use]
pub fn has_most_cards(side: Side, players: &[Player; 2], initial_player: Side) -> bool {
    let own = players[side.index()].win_pile.len();
    let other = players[side.opponent().index()].win_pile.len();

    own > other || (own == other && side == initial_player)
}
