//! Game engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{HAND_SIZE, Hand};
use crate::player::{Player, Side};
use crate::result::Score;
use crate::table::{INITIAL_TABLE_SIZE, Table};

mod play;
mod round;
pub mod state;

pub use state::GameState;

/// Cards needed before the first turn: the table and both hands.
pub const OPENING_DEAL: usize = INITIAL_TABLE_SIZE + 2 * HAND_SIZE;

/// An Indigo game between the human and the computer.
///
/// The game owns the deck, the table, both sides and the random source used
/// for shuffling and for the computer's tie-breaks. Drive it with
/// [`Game::run`] or one [`Game::step`] at a time.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards left to draw.
    deck: Deck,
    /// Face-up cards.
    table: Table,
    /// Both sides, indexed by [`Side`].
    players: [Player; 2],
    /// The side that played first.
    initial_player: Side,
    /// The side that captured most recently.
    last_winner: Side,
    /// Current game state.
    state: GameState,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a freshly shuffled deck.
    ///
    /// `first` is the side that plays the first card.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, GameState, Side};
    ///
    /// let game = Game::new(Side::Player, 42);
    /// assert_eq!(game.state(), GameState::AwaitingPlayerMove);
    /// assert_eq!(game.deck().len(), 36);
    /// assert_eq!(game.table().len(), 4);
    /// ```
    #[must_use]
    pub fn new(first: Side, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::deal_opening(deck, first, rng)
    }

    /// Creates a game drawing from a prepared deck.
    ///
    /// The seed still drives the computer's random choices.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck cannot cover the opening deal.
    pub fn with_deck(deck: Deck, first: Side, seed: u64) -> Result<Self, DealError> {
        if deck.len() < OPENING_DEAL {
            return Err(DealError::NotEnoughCards {
                needed: OPENING_DEAL,
                available: deck.len(),
            });
        }

        Ok(Self::deal_opening(deck, first, ChaCha8Rng::seed_from_u64(seed)))
    }

    fn deal_opening(mut deck: Deck, first: Side, rng: ChaCha8Rng) -> Self {
        let table = Table::from_cards(deck.draw(INITIAL_TABLE_SIZE));
        let players = Side::ALL.map(|_| Player::new(Hand::from_cards(deck.draw(HAND_SIZE))));

        debug!(%first, deck = deck.len(), "opening deal done");

        Self {
            deck,
            table,
            players,
            initial_player: first,
            last_winner: first,
            state: GameState::awaiting(first),
            rng,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the side to move, or `None` once the game is over.
    #[must_use]
    pub const fn active(&self) -> Option<Side> {
        self.state.active_side()
    }

    /// Returns the side that played first.
    #[must_use]
    pub const fn initial_player(&self) -> Side {
        self.initial_player
    }

    /// Returns the side that captured most recently.
    #[must_use]
    pub const fn last_winner(&self) -> Side {
        self.last_winner
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the face-up cards.
    #[must_use]
    pub const fn table(&self) -> &Table {
        &self.table
    }

    /// Returns the hand and win pile of `side`.
    #[must_use]
    pub const fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Returns both sides, human first.
    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Counts every card in the game, wherever it is.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.table.len()
            + self
                .players
                .iter()
                .map(|player| player.hand.len() + player.win_pile.len())
                .sum::<usize>()
    }

    /// Returns the running score, without the most-cards bonus.
    #[must_use]
    pub fn score(&self) -> Score {
        Score::snapshot(&self.players, None)
    }

    /// Returns the score as it stands at the end of the game, bonus included.
    #[must_use]
    pub fn final_score(&self) -> Score {
        Score::snapshot(&self.players, Some(self.initial_player))
    }
}
