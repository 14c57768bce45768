use tracing::debug;

use crate::card::Card;
use crate::error::TurnError;
use crate::event::{GameEvent, Observer};
use crate::player::Side;
use crate::result::PlayOutcome;
use crate::strategy::{Move, MoveSource, TurnView};

use super::{Game, GameState};

impl Game {
    /// Plays the whole game.
    ///
    /// Reports the opening table, then steps until the round ends or a side
    /// exits. Returns the terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or a move source picks a
    /// card index outside its hand.
    pub fn run(
        &mut self,
        human: &mut dyn MoveSource,
        computer: &mut dyn MoveSource,
        observer: &mut dyn Observer,
    ) -> Result<GameState, TurnError> {
        if self.state.is_terminal() {
            return Err(TurnError::InvalidState);
        }

        observer.on_event(&GameEvent::InitialTable(self.table.cards().to_vec()));
        observer.on_event(&GameEvent::Separator);

        while !self.state.is_terminal() {
            self.step(human, computer, observer)?;
        }

        Ok(self.state)
    }

    /// Plays one turn of the active side.
    ///
    /// Reports the table; if the active side has no cards left the game is
    /// scored and ends. Otherwise the side's hand is shown and its move
    /// source is asked for a move.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or the move source picks
    /// a card index outside the hand. The game is left unchanged in the
    /// latter case and the turn can be retried.
    pub fn step(
        &mut self,
        human: &mut dyn MoveSource,
        computer: &mut dyn MoveSource,
        observer: &mut dyn Observer,
    ) -> Result<GameState, TurnError> {
        let side = self.state.active_side().ok_or(TurnError::InvalidState)?;

        observer.on_event(&GameEvent::TableStatus {
            len: self.table.len(),
            top: self.table.top(),
        });

        if self.players[side.index()].hand.is_empty() {
            self.end_round(observer);
            return Ok(self.state);
        }

        let hand = self.players[side.index()].hand.cards();
        observer.on_event(&GameEvent::HandShown {
            side,
            cards: hand.to_vec(),
        });

        let turn = TurnView {
            side,
            hand,
            top: self.table.top(),
        };
        let chosen = match side {
            Side::Player => human.choose_move(&turn, &mut self.rng),
            Side::Computer => computer.choose_move(&turn, &mut self.rng),
        };

        match chosen {
            Move::Exit => self.abort(observer),
            Move::Play(index) => {
                self.play(index, observer)?;
            }
        }

        Ok(self.state)
    }

    /// Plays the card at `index` of the active side's hand.
    ///
    /// The card captures the table when it shares rank or suit with the top
    /// card and is put on the table otherwise. A hand emptied by the play is
    /// refilled if the deck allows. The turn then passes to the other side.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or `index` is not in
    /// the hand.
    pub fn play(
        &mut self,
        index: usize,
        observer: &mut dyn Observer,
    ) -> Result<PlayOutcome, TurnError> {
        let side = self.state.active_side().ok_or(TurnError::InvalidState)?;

        let hand = &mut self.players[side.index()].hand;
        let len = hand.len();
        let card = hand
            .play(index)
            .ok_or(TurnError::CardOutOfRange { index, len })?;

        observer.on_event(&GameEvent::CardPlayed { side, card });
        let outcome = self.resolve(side, card, observer);
        self.state = GameState::awaiting(side.opponent());

        Ok(outcome)
    }

    fn resolve(&mut self, side: Side, card: Card, observer: &mut dyn Observer) -> PlayOutcome {
        let outcome = if self.table.top().is_some_and(|top| card.matches(top)) {
            let mut taken = self.table.clear();
            taken.push(card);
            let cards = taken.len();

            self.players[side.index()].win_pile.add_all(taken);
            self.last_winner = side;
            debug!(%side, %card, cards, "table captured");

            observer.on_event(&GameEvent::Captured { side, cards });
            observer.on_event(&GameEvent::Score(self.score()));
            PlayOutcome::Captured { cards }
        } else {
            self.table.add(card);
            PlayOutcome::Discarded
        };
        observer.on_event(&GameEvent::Separator);

        let player = &mut self.players[side.index()];
        if player.hand.is_empty() {
            if player.hand.deal(&mut self.deck) {
                debug!(%side, deck = self.deck.len(), "hand refilled");
            } else {
                debug!(%side, deck = self.deck.len(), "deck too short to refill");
            }
        }

        outcome
    }
}
