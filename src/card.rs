//! Card types and deck utilities.

use core::fmt;

use alloc::vec::Vec;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the symbol used when printing the suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
            Self::Clubs => '♣',
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Card rank, from Ace up to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the symbol used when printing the rank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Returns the points a captured card of this rank is worth.
    ///
    /// Ace, ten and the face cards count one point, everything else nothing.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Ace | Self::Ten | Self::Jack | Self::Queen | Self::King => 1,
            _ => 0,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the points this card is worth in a win pile.
    #[must_use]
    pub const fn points(self) -> u32 {
        self.rank.points()
    }

    /// Returns whether this card shares its rank or its suit with `other`.
    #[must_use]
    pub fn matches(self, other: Self) -> bool {
        self.rank == other.rank || self.suit == other.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the 52 distinct cards in canonical order, suit by suit.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

pub(crate) struct Joined<'a>(pub(crate) &'a [Card]);

impl fmt::Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
