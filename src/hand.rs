//! Player and dealer hand representation.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::AceScoring;

/// Highest total that does not bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card], scoring: AceScoring) -> (u8, bool) {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        let card_value = card.value();
        if card_value.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card_value.high());
    }

    match scoring {
        AceScoring::Soft => {
            while value > BLACKJACK && aces > 0 {
                value -= 10;
                aces -= 1;
            }
            (value, aces > 0)
        }
        AceScoring::AllHard => {
            if value > BLACKJACK {
                (value.saturating_sub(aces.saturating_mul(10)), false)
            } else {
                (value, aces > 0)
            }
        }
    }
}

/// A hand of cards held by the player or the dealer.
///
/// A hand that is not revealed discloses only its first card, both in
/// [`Hand::points`] and in [`Hand::show_cards`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Whether every card counts toward the visible score.
    reveal: bool,
    /// Ace correction rule.
    ace_scoring: AceScoring,
}

impl Hand {
    /// Creates an empty, fully revealed hand for the player.
    #[must_use]
    pub const fn player() -> Self {
        Self {
            cards: Vec::new(),
            reveal: true,
            ace_scoring: AceScoring::Soft,
        }
    }

    /// Creates an empty dealer hand with the hole card hidden.
    #[must_use]
    pub const fn dealer() -> Self {
        Self {
            cards: Vec::new(),
            reveal: false,
            ace_scoring: AceScoring::Soft,
        }
    }

    /// Sets the ace correction rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{AceScoring, Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::player().with_ace_scoring(AceScoring::AllHard);
    /// hand.add_card(Card::new(Suit::Hearts, Rank::Ace));
    /// hand.add_card(Card::new(Suit::Spades, Rank::Ace));
    /// assert_eq!(hand.points(), 2);
    /// ```
    #[must_use]
    pub fn with_ace_scoring(mut self, scoring: AceScoring) -> Self {
        self.ace_scoring = scoring;
        self
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the one shown while the hand is hidden.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether every card is disclosed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.reveal
    }

    /// Discloses every card. Revealing twice has no further effect.
    pub const fn reveal(&mut self) {
        self.reveal = true;
    }

    /// Returns the ace correction rule of this hand.
    #[must_use]
    pub const fn ace_scoring(&self) -> AceScoring {
        self.ace_scoring
    }

    /// Calculates the disclosed score.
    ///
    /// A hidden hand scores its first card only, an ace counting 11.
    /// A revealed hand scores every card with soft-ace correction.
    /// An empty hand scores 0.
    #[must_use]
    pub fn points(&self) -> u8 {
        if self.reveal {
            self.total_points()
        } else {
            self.cards.first().map_or(0, |card| card.value().high())
        }
    }

    /// Calculates the score of every card, whether or not the hand is revealed.
    #[must_use]
    pub fn total_points(&self) -> u8 {
        evaluate_cards(&self.cards, self.ace_scoring).0
    }

    /// Returns whether an ace is still counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards, self.ace_scoring).1
    }

    /// Returns whether the disclosed score is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.points() > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.total_points() == BLACKJACK
    }

    /// Renders the disclosed cards as `"value suit"` entries joined by `" | "`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Card, Hand, Rank, Suit};
    ///
    /// let mut hand = Hand::player();
    /// hand.add_card(Card::new(Suit::Hearts, Rank::King));
    /// hand.add_card(Card::new(Suit::Clubs, Rank::Ace));
    /// assert_eq!(hand.show_cards(), "10 hearts | 11/1 clubs");
    /// ```
    #[must_use]
    pub fn show_cards(&self) -> String {
        if self.reveal {
            self.cards
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" | ")
        } else {
            self.cards
                .first()
                .map(ToString::to_string)
                .unwrap_or_default()
        }
    }
}
