//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur when building or drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Every card has already been dealt.
    #[error("deck exhausted")]
    Exhausted,
    /// A stacked deck listed the same card twice.
    #[error("duplicate card in deck")]
    DuplicateCard,
}

/// Errors that can occur during the opening deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the deck for two cards per side.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round already has an outcome.
    #[error("invalid action for a finished round")]
    RoundOver,
    /// The deck ran out while drawing.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
