//! Round outcome types.

/// Final outcome of a round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player's hand went over 21.
    PlayerBust,
    /// The dealer finished closer to 21 than the player.
    DealerWin,
    /// The player won: a natural, a dealer bust, or a total the dealer did not beat.
    PlayerWin,
    /// Both sides were dealt a natural.
    Push,
}

impl Outcome {
    /// Returns the external status string.
    ///
    /// Both ways of losing map to `"Bust"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlayerBust | Self::DealerWin => "Bust",
            Self::PlayerWin => "Win",
            Self::Push => "Push",
        }
    }

    /// Returns whether the player lost the round.
    #[must_use]
    pub const fn is_loss(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWin)
    }
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's full hand value.
    pub player_value: u8,
    /// The dealer's full hand value, hole card included.
    pub dealer_value: u8,
    /// Whether the dealer went over 21.
    pub dealer_bust: bool,
    /// Whether the player was dealt a natural.
    pub player_blackjack: bool,
}
