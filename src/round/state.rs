//! Round state types.

use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundState {
    /// Waiting for the player to hit or stand.
    #[default]
    InProgress,
    /// The round has an outcome. Terminal.
    Over(Outcome),
}

impl RoundState {
    /// Returns the external status string: `""` while in progress, otherwise
    /// `"Bust"`, `"Win"` or `"Push"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "",
            Self::Over(outcome) => outcome.as_str(),
        }
    }

    /// Returns whether the round has an outcome.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Over(_))
    }

    /// Returns the outcome, if the round is over.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::InProgress => None,
            Self::Over(outcome) => Some(outcome),
        }
    }
}
