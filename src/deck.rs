//! The 52-card deck a round is dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// A single deck of playing cards with its own random number generator.
///
/// The generator is injected so draws are reproducible: two decks built from
/// the same seed deal the same cards in the same order.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards not yet dealt since the last shuffle. The next card drawn is the last one.
    playable_cards: Vec<Card>,
    /// Random number generator.
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a shuffled deck seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(42);
    /// assert_eq!(deck.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a deck that deals exactly `draws`, in order.
    ///
    /// Calling [`Deck::shuffle`] afterwards restores a full 52-card deck
    /// shuffled with a generator seeded from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if `draws` lists a card more than once.
    pub fn stacked(draws: &[Card], seed: u64) -> Result<Self, DeckError> {
        let mut playable_cards: Vec<Card> = Vec::with_capacity(draws.len());
        for &card in draws.iter().rev() {
            if playable_cards.contains(&card) {
                return Err(DeckError::DuplicateCard);
            }
            playable_cards.push(card);
        }

        Ok(Self {
            playable_cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }
}

impl<R: RngCore> Deck<R> {
    /// Creates a shuffled deck drawing randomness from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        let mut deck = Self {
            playable_cards: Vec::with_capacity(DECK_SIZE),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Rebuilds the full deck, one card per suit and rank, in random order.
    pub fn shuffle(&mut self) {
        self.playable_cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.playable_cards.push(Card::new(suit, rank));
            }
        }

        self.playable_cards.shuffle(&mut self.rng);
        log::trace!("deck shuffled");
    }

    /// Removes and returns one card.
    ///
    /// The remaining cards are in random order, so this is a uniform draw
    /// without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if every card has been dealt.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.playable_cards.pop().ok_or(DeckError::Exhausted)
    }

    /// Returns the cards not yet dealt.
    #[must_use]
    pub fn playable_cards(&self) -> &[Card] {
        &self.playable_cards
    }

    /// Returns the number of cards not yet dealt.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.playable_cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.playable_cards.is_empty()
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.playable_cards.contains(card)
    }
}
