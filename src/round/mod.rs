//! Round engine and state management.

use alloc::string::String;

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::DealError;
use crate::hand::{BLACKJACK, Hand};
use crate::options::RoundOptions;
use crate::result::{Outcome, RoundResult};

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// Cards needed for the opening deal: two per side.
const OPENING_CARDS: usize = 4;

/// A single blackjack round between one player and the dealer.
///
/// The round owns its deck and both hands. Construction deals the opening
/// cards; the caller then drives [`Round::hit`] and [`Round::stand`] until
/// [`Round::status`] reports an outcome.
#[derive(Debug, Clone)]
pub struct Round<R = ChaCha8Rng> {
    /// Cards left to deal.
    deck: Deck<R>,
    /// Dealer's hand, hidden until the dealer plays.
    dealer: Hand,
    /// Player's hand.
    player: Hand,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
}

impl Round<ChaCha8Rng> {
    /// Creates a round with default options, dealt from a fresh deck seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::Round;
    ///
    /// let round = Round::new(42);
    /// assert_eq!(round.player_hand().len(), 2);
    /// assert_eq!(round.dealer_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_options(RoundOptions::default(), seed)
    }

    /// Creates a round with the given options, dealt from a fresh deck seeded with `seed`.
    #[must_use]
    #[expect(
        clippy::missing_panics_doc,
        reason = "a fresh deck always holds enough cards for the opening deal"
    )]
    pub fn with_options(options: RoundOptions, seed: u64) -> Self {
        Self::from_deck(options, Deck::new(seed))
            .expect("a fresh deck holds enough cards for the opening deal")
    }
}

impl<R: RngCore> Round<R> {
    /// Creates a round dealt from `deck`.
    ///
    /// Cards are dealt player, dealer, player, dealer. If the player is dealt
    /// a natural, the dealer's hand is revealed and the round ends at once.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the deck holds fewer than four cards.
    pub fn from_deck(options: RoundOptions, deck: Deck<R>) -> Result<Self, DealError> {
        if deck.cards_remaining() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let mut round = Self {
            deck,
            dealer: Hand::dealer().with_ace_scoring(options.ace_scoring),
            player: Hand::player().with_ace_scoring(options.ace_scoring),
            options,
            state: RoundState::InProgress,
        };
        round.deal()?;
        Ok(round)
    }

    fn deal(&mut self) -> Result<(), DealError> {
        for _ in 0..2 {
            let card = self
                .deck
                .deal_card()
                .map_err(|_| DealError::NotEnoughCards)?;
            self.player.add_card(card);

            let card = self
                .deck
                .deal_card()
                .map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        log::debug!(
            "dealt player [{}], dealer shows [{}]",
            self.player.show_cards(),
            self.dealer.show_cards()
        );

        if self.player.is_blackjack() {
            self.dealer.reveal();
            let outcome = if self.dealer.is_blackjack() {
                Outcome::Push
            } else {
                Outcome::PlayerWin
            };
            self.finish(outcome);
        }

        Ok(())
    }

    /// Moves the round to its terminal state.
    fn finish(&mut self, outcome: Outcome) {
        debug_assert!(!self.state.is_over(), "round outcome is set once");
        self.state = RoundState::Over(outcome);
        log::info!(
            "round over: {outcome:?} (player {}, dealer {})",
            self.player.total_points(),
            self.dealer.total_points()
        );
    }

    /// Returns whether `hand`'s disclosed score is over 21.
    #[must_use]
    pub fn is_bust(&self, hand: &Hand) -> bool {
        hand.is_bust()
    }

    /// Returns the player's score.
    #[must_use]
    pub fn player_points(&self) -> u8 {
        self.player.points()
    }

    /// Returns the dealer's disclosed score: the up card only until the
    /// dealer's hand is revealed.
    #[must_use]
    pub fn dealer_points(&self) -> u8 {
        self.dealer.points()
    }

    /// Renders the player's cards.
    #[must_use]
    pub fn player_cards(&self) -> String {
        self.player.show_cards()
    }

    /// Renders the dealer's disclosed cards.
    #[must_use]
    pub fn dealer_cards(&self) -> String {
        self.dealer.show_cards()
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn status(&self) -> RoundState {
        self.state
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.cards_remaining()
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns a summary of the round once it is over.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        let outcome = self.state.outcome()?;
        let dealer_value = self.dealer.total_points();

        Some(RoundResult {
            outcome,
            player_value: self.player.total_points(),
            dealer_value,
            dealer_bust: dealer_value > BLACKJACK,
            player_blackjack: self.player.is_blackjack(),
        })
    }
}
