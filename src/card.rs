//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    /// Returns the lowercase name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Spades => "spades",
            Self::Clubs => "clubs",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
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
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
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
        Self::Ace,
    ];

    /// Returns the point value of the rank.
    ///
    /// Jack, queen and king count 10. The ace carries both of its candidate
    /// values; the hand decides which one applies.
    #[must_use]
    pub const fn value(self) -> CardValue {
        match self {
            Self::Two => CardValue::Single(2),
            Self::Three => CardValue::Single(3),
            Self::Four => CardValue::Single(4),
            Self::Five => CardValue::Single(5),
            Self::Six => CardValue::Single(6),
            Self::Seven => CardValue::Single(7),
            Self::Eight => CardValue::Single(8),
            Self::Nine => CardValue::Single(9),
            Self::Ten | Self::Jack | Self::Queen | Self::King => CardValue::Single(10),
            Self::Ace => CardValue::Ace { high: 11, low: 1 },
        }
    }
}

/// Point value of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue {
    /// A fixed value.
    Single(u8),
    /// An ace, worth `high` unless that would bust the hand.
    Ace {
        /// Value counted by default (11).
        high: u8,
        /// Value after soft-ace correction (1).
        low: u8,
    },
}

impl CardValue {
    /// Returns the value counted before any soft-ace correction.
    #[must_use]
    pub const fn high(self) -> u8 {
        match self {
            Self::Single(value) | Self::Ace { high: value, .. } => value,
        }
    }

    /// Returns whether this is an ace value.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace { .. })
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(value) => write!(f, "{value}"),
            Self::Ace { high, low } => write!(f, "{high}/{low}"),
        }
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

    /// Returns the point value of the card.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.rank.value()
    }
}

/// Renders the card as `"<value> <suit>"`, e.g. `"10 hearts"` or `"11/1 spades"`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value(), self.suit)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
