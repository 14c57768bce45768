//! Game state types.

use crate::player::Side;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the human to play a card.
    AwaitingPlayerMove,
    /// Waiting for the computer to play a card.
    AwaitingComputerMove,
    /// A side ran out of cards and the game was scored.
    RoundEnded,
    /// The human left before the end.
    Aborted,
}

impl GameState {
    /// Returns the state in which `side` has to move.
    #[must_use]
    pub const fn awaiting(side: Side) -> Self {
        match side {
            Side::Player => Self::AwaitingPlayerMove,
            Side::Computer => Self::AwaitingComputerMove,
        }
    }

    /// Returns the side to move, or `None` once the game is over.
    #[must_use]
    pub const fn active_side(self) -> Option<Side> {
        match self {
            Self::AwaitingPlayerMove => Some(Side::Player),
            Self::AwaitingComputerMove => Some(Side::Computer),
            Self::RoundEnded | Self::Aborted => None,
        }
    }

    /// Returns whether no more moves can be made.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::RoundEnded | Self::Aborted)
    }
}
