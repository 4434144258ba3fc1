use rand::RngCore;

use crate::card::Card;
use crate::error::ActionError;
use crate::result::Outcome;

use super::Round;

impl<R: RngCore> Round<R> {
    /// Player action: Hit (draw a card).
    ///
    /// Going over 21 ends the round with [`Outcome::PlayerBust`].
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::RoundOver`] if the round already has an outcome,
    /// or [`ActionError::Deck`] if the deck is exhausted. Neither changes the round.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.state.is_over() {
            return Err(ActionError::RoundOver);
        }

        let card = self.deck.deal_card()?;
        self.player.add_card(card);
        log::debug!("player draws {card}, total {}", self.player.points());

        if self.is_bust(&self.player) {
            self.finish(Outcome::PlayerBust);
        }

        Ok(card)
    }
}
