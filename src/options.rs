//! Round configuration options.

/// How aces are corrected when a hand would otherwise exceed 21.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceScoring {
    /// Standard rules: aces drop from 11 to 1 one at a time, only while the
    /// total exceeds 21. Ace plus ace counts 12.
    #[default]
    Soft,
    /// Single pass: once the total exceeds 21, every ace counts 1.
    /// Ace plus ace counts 2.
    AllHard,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjround::{AceScoring, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_dealer_stands_on(17)
///     .with_ace_scoring(AceScoring::AllHard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Lowest total at which the dealer stops drawing.
    pub dealer_stands_on: u8,
    /// Ace correction rule for both hands.
    pub ace_scoring: AceScoring,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 18,
            ace_scoring: AceScoring::Soft,
        }
    }
}

impl RoundOptions {
    /// Sets the total at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_stands_on(17);
    /// assert_eq!(options.dealer_stands_on, 17);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the ace correction rule.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{AceScoring, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_ace_scoring(AceScoring::AllHard);
    /// assert_eq!(options.ace_scoring, AceScoring::AllHard);
    /// ```
    #[must_use]
    pub const fn with_ace_scoring(mut self, scoring: AceScoring) -> Self {
        self.ace_scoring = scoring;
        self
    }
}
