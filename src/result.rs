//! Score and play result types.

use core::fmt;

use crate::player::{Player, Side, score};

/// Outcome of a single play against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card matched the top card and the table was taken.
    Captured {
        /// Cards moved into the win pile, the played card included.
        cards: usize,
    },
    /// The card was put on the table.
    Discarded,
}

/// Scores and captured card counts of both sides at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// The human's score.
    pub player_points: u32,
    /// The computer's score.
    pub computer_points: u32,
    /// Cards captured by the human.
    pub player_cards: usize,
    /// Cards captured by the computer.
    pub computer_cards: usize,
}

impl Score {
    /// Captures the current score of both sides.
    ///
    /// `initial_player` is only given for the final score, see
    /// [`score`](crate::player::score).
    #[must_use]
    pub fn snapshot(players: &[Player; 2], initial_player: Option<Side>) -> Self {
        Self {
            player_points: score(Side::Player, players, initial_player),
            computer_points: score(Side::Computer, players, initial_player),
            player_cards: players[Side::Player.index()].win_pile.len(),
            computer_cards: players[Side::Computer.index()].win_pile.len(),
        }
    }

    /// Returns the points of `side`.
    #[must_use]
    pub const fn points(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player_points,
            Side::Computer => self.computer_points,
        }
    }

    /// Returns the captured card count of `side`.
    #[must_use]
    pub const fn cards(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_cards,
            Side::Computer => self.computer_cards,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Score: {} {} - {} {}",
            Side::Player,
            self.player_points,
            Side::Computer,
            self.computer_points
        )?;
        write!(
            f,
            "Cards: {} {} - {} {}",
            Side::Player,
            self.player_cards,
            Side::Computer,
            self.computer_cards
        )
    }
}
