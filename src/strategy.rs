//! Move selection for both sides.
//!
//! The engine asks a [`MoveSource`] which card to play. The console reads it
//! from the human; [`ComputerStrategy`] picks one with [`select_card`].

use alloc::vec::Vec;

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use tracing::trace;

use crate::card::{Card, Rank, Suit};
use crate::player::Side;

/// What the active side sees when it has to move.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// The side to move.
    pub side: Side,
    /// Its cards, in hand order.
    pub hand: &'a [Card],
    /// The top card of the table, if any.
    pub top: Option<Card>,
}

/// A move chosen by a [`MoveSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Play the card at this 0-based hand index.
    Play(usize),
    /// Leave the game without scoring it.
    Exit,
}

/// Decides the moves of one side.
pub trait MoveSource {
    /// Chooses the next move.
    ///
    /// `rng` is the game's random source, shared with the shuffle.
    fn choose_move(&mut self, turn: &TurnView<'_>, rng: &mut dyn RngCore) -> Move;
}

/// The computer opponent's heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputerStrategy;

impl ComputerStrategy {
    /// Creates the strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl MoveSource for ComputerStrategy {
    fn choose_move(&mut self, turn: &TurnView<'_>, rng: &mut dyn RngCore) -> Move {
        // An empty hand never reaches a move source; exiting is the only
        // answer left.
        select_card(turn.hand, turn.top, rng).map_or(Move::Exit, Move::Play)
    }
}

/// Picks the card the computer plays and returns its index in `hand`.
///
/// In order of priority:
///
/// 1. a lone card in hand is played;
/// 2. a single card matching the top card by rank or suit is played;
/// 3. otherwise the pool is every matching card, or the whole hand when
///    nothing matches, and a random card is drawn from the pool cards that
///    share their suit with another pool card, else from those sharing their
///    rank, else from the whole pool.
///
/// Returns `None` only for an empty hand.
///
/// # Example
///
/// ```
/// use indigo::{Card, Rank, Suit, select_card};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let hand = [
///     Card::new(Suit::Diamonds, Rank::Three),
///     Card::new(Suit::Hearts, Rank::Three),
///     Card::new(Suit::Spades, Rank::Seven),
/// ];
/// let top = Card::new(Suit::Clubs, Rank::Seven);
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
///
/// assert_eq!(select_card(&hand, Some(top), &mut rng), Some(2));
/// ```
pub fn select_card<R: Rng + ?Sized>(
    hand: &[Card],
    top: Option<Card>,
    rng: &mut R,
) -> Option<usize> {
    if hand.len() <= 1 {
        return (!hand.is_empty()).then_some(0);
    }

    let candidates: Vec<usize> = top.map_or_else(Vec::new, |top| {
        (0..hand.len()).filter(|&i| hand[i].matches(top)).collect()
    });

    if let [only] = candidates[..] {
        trace!(card = %hand[only], "single matching card");
        return Some(only);
    }

    let pool = if candidates.is_empty() {
        (0..hand.len()).collect()
    } else {
        candidates
    };

    let same_suit = sharing_key::<{ Suit::ALL.len() }>(hand, &pool, |card| card.suit.index());
    if !same_suit.is_empty() {
        trace!(choices = same_suit.len(), "picking among cards sharing a suit");
        return same_suit.choose(rng).copied();
    }

    let same_rank = sharing_key::<{ Rank::ALL.len() }>(hand, &pool, |card| card.rank.index());
    if !same_rank.is_empty() {
        trace!(choices = same_rank.len(), "picking among cards sharing a rank");
        return same_rank.choose(rng).copied();
    }

    trace!(choices = pool.len(), "picking any card");
    pool.choose(rng).copied()
}

/// Returns the pool indices whose key occurs at least twice in the pool,
/// keeping pool order.
fn sharing_key<const N: usize>(
    hand: &[Card],
    pool: &[usize],
    key: impl Fn(&Card) -> usize,
) -> Vec<usize> {
    let mut counts = [0_u8; N];
    for &i in pool {
        counts[key(&hand[i])] += 1;
    }

    pool.iter()
        .copied()
        .filter(|&i| counts[key(&hand[i])] > 1)
        .collect()
}
