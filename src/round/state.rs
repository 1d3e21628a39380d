//! Round state and turn decisions.

use alloc::string::ToString;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InvalidDecisionInput;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundState {
    /// Waiting for the opening cards.
    Dealing,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and its result is fixed.
    Resolved,
}

/// A player decision during [`RoundState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take one more card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl FromStr for Decision {
    type Err = InvalidDecisionInput;

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding
    /// whitespace.
    ///
    /// ```
    /// use twentyone::Decision;
    ///
    /// assert_eq!("H".parse::<Decision>(), Ok(Decision::Hit));
    /// assert_eq!(" stand\n".parse::<Decision>(), Ok(Decision::Stand));
    /// assert!("double".parse::<Decision>().is_err());
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("h") || trimmed.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if trimmed.eq_ignore_ascii_case("s") || trimmed.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InvalidDecisionInput(trimmed.to_string()))
        }
    }
}
