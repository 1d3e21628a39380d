//! A blackjack rules engine with optional `no_std` support.
//!
//! The crate scores hands, deals from a shuffled shoe, resolves rounds and
//! sequences the turns of a single player against the dealer through the
//! [`Round`] state machine. Front-ends feed it [`Decision`]s and render the
//! [`Card`]s it returns.
//!
//! # Example
//!
//! ```
//! use twentyone::{Decision, GameOptions, Round, RoundState};
//!
//! let mut round = Round::new(GameOptions::default(), 42);
//! round.deal().unwrap();
//! while round.state() == RoundState::PlayerTurn {
//!     let decision = if round.player_hand().value() < 17 {
//!         Decision::Hit
//!     } else {
//!         Decision::Stand
//!     };
//!     round.act(decision).unwrap();
//! }
//! println!("{}", round.outcome().unwrap());
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
pub mod ext;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod player;
pub mod round;
pub mod store;
mod sync;

// Re-export main types
pub use card::{Card, CardLabel, DECK_SIZE, LabelStyle, Rank, Suit};
pub use deck::{Deck, new_shoe};
pub use error::{
    ActionError, BetError, DealError, EmptyDeckError, InvalidDecisionInput, StoreError,
};
pub use ext::{SoftHand, SplitHand};
pub use hand::{BLACKJACK, DealerHand, Hand, is_blackjack, value};
pub use options::{ExhaustionPolicy, GameOptions};
pub use outcome::{Outcome, RoundResult, resolve};
pub use player::{DEFAULT_CHIPS, Player};
pub use round::{Decision, Round, RoundState};
pub use store::{GameId, GameStore, GameView};
