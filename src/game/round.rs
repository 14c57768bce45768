use tracing::{debug, info};

use crate::event::{GameEvent, Observer};
use crate::result::Score;

use super::{Game, GameState};

impl Game {
    /// Scores the game once a side has run out of cards.
    ///
    /// The last side to capture takes whatever is left on the table.
    pub(super) fn end_round(&mut self, observer: &mut dyn Observer) -> Score {
        let leftovers = self.table.clear();
        debug!(
            winner = %self.last_winner,
            cards = leftovers.len(),
            "leftover table cards awarded"
        );
        self.players[self.last_winner.index()]
            .win_pile
            .add_all(leftovers);

        let score = self.final_score();
        observer.on_event(&GameEvent::FinalScore(score));

        self.state = GameState::RoundEnded;
        observer.on_event(&GameEvent::GameOver);

        info!(
            player = score.player_points,
            computer = score.computer_points,
            "round ended"
        );
        score
    }

    /// Leaves the game without scoring it.
    pub(super) fn abort(&mut self, observer: &mut dyn Observer) {
        info!(side = ?self.state.active_side(), "game aborted");
        self.state = GameState::Aborted;
        observer.on_event(&GameEvent::GameOver);
    }
}
