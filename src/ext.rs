//! Optional hand capabilities outside the core scoring contract.
//!
//! Nothing in [`Round`](crate::Round) requires these except the dealer's
//! soft-17 rule. Split *play* is not supported; [`SplitHand`] only performs
//! the card bookkeeping.

use crate::card::Card;
use crate::hand::{DealerHand, Hand, evaluate_cards};

/// Returns whether at least one Ace in the cards still counts as 11.
#[must_use]
pub fn is_soft(cards: &[Card]) -> bool {
    evaluate_cards(cards).1
}

/// Hands that can report a soft total.
pub trait SoftHand {
    /// Returns whether the hand is soft (contains an ace counted as 11).
    fn is_soft(&self) -> bool;
}

impl SoftHand for Hand {
    fn is_soft(&self) -> bool {
        is_soft(self.cards())
    }
}

impl SoftHand for DealerHand {
    fn is_soft(&self) -> bool {
        is_soft(self.cards())
    }
}

/// Hands that can be split into two.
pub trait SplitHand: Sized {
    /// Returns whether the hand is a pair of equal ranks.
    fn can_split(&self) -> bool;

    /// Splits a pair into two one-card hands.
    ///
    /// Returns `None` if the hand cannot be split.
    fn split(&self) -> Option<(Self, Self)>;
}

impl SplitHand for Hand {
    fn can_split(&self) -> bool {
        matches!(self.cards(), [first, second] if first.rank == second.rank)
    }

    fn split(&self) -> Option<(Self, Self)> {
        match self.cards() {
            [first, second] if first.rank == second.rank => Some((
                Self::from_iter([*first]),
                Self::from_iter([*second]),
            )),
            _ => None,
        }
    }
}
