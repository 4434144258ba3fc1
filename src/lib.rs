//! A single-player blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals one player and the dealer
//! two cards each from a seeded [`Deck`], then resolves the round as the
//! caller hits and stands. The dealer draws below 18 and aces count 11 unless
//! that would bust the hand.
//!
//! # Example
//!
//! ```
//! use bjround::{Round, RoundState};
//!
//! let mut round = Round::new(42);
//! if round.status() == RoundState::InProgress {
//!     round.stand().unwrap();
//! }
//! assert!(round.status().is_over());
//! assert!(!round.status().as_str().is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, CardValue, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError};
pub use hand::{BLACKJACK, Hand};
pub use options::{AceScoring, RoundOptions};
pub use result::{Outcome, RoundResult};
pub use round::{Round, RoundState};
