use core::cmp::Ordering;

use alloc::vec::Vec;
use rand::RngCore;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::Round;

impl<R: RngCore> Round<R> {
    /// Player action: Stand. The dealer then plays out their hand.
    ///
    /// The dealer's hand is revealed and the dealer draws until reaching
    /// [`RoundOptions::dealer_stands_on`](crate::RoundOptions::dealer_stands_on)
    /// or going over 21. A dealer bust is a player win. Otherwise the dealer
    /// wins only with a higher total; an equal total goes to the player.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::RoundOver`] if the round already has an outcome.
    /// The dealer's hand is still revealed in that case so the final table can
    /// be shown, but nothing is drawn.
    ///
    /// Returns [`ActionError::Deck`] if the deck runs out while the dealer must
    /// draw. The round stays in progress.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        self.dealer.reveal();
        if self.state.is_over() {
            return Err(ActionError::RoundOver);
        }

        let mut drawn_cards = Vec::new();
        while self.dealer.points() < self.options.dealer_stands_on && !self.is_bust(&self.dealer)
        {
            let card = self.deck.deal_card()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            log::debug!("dealer draws {card}, total {}", self.dealer.points());
        }

        let outcome = self.settle();
        self.finish(outcome);

        Ok(drawn_cards)
    }

    /// Compares the revealed dealer hand against the player's.
    fn settle(&self) -> Outcome {
        if self.is_bust(&self.dealer) {
            return Outcome::PlayerWin;
        }

        match self.dealer.points().cmp(&self.player.points()) {
            Ordering::Greater => Outcome::DealerWin,
            Ordering::Less | Ordering::Equal => Outcome::PlayerWin,
        }
    }
}
