//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::store::GameId;

/// A card was requested from an exhausted deck.
///
/// Only returned under [`ExhaustionPolicy::Fail`](crate::ExhaustionPolicy::Fail).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Cards have already been dealt this round.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the opening hands.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player or dealer actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out while drawing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient chips.
    #[error("insufficient chips")]
    InsufficientFunds,
    /// A bet is already waiting to be settled.
    #[error("a bet is already pending")]
    BetPending,
}

/// A turn decision outside {hit, stand}.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decision {0:?}: expected 'h'/'hit' or 's'/'stand'")]
pub struct InvalidDecisionInput(pub String);

/// Errors returned by the [`GameStore`](crate::GameStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No game is registered under this identifier.
    #[error("game {0} not found")]
    GameNotFound(GameId),
    /// The action was rejected by the round.
    #[error(transparent)]
    Action(#[from] ActionError),
}
