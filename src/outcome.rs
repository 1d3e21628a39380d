//! Round resolution.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::hand::{self, BLACKJACK};

/// Terminal classification of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Player wins with a natural blackjack.
    PlayerBlackjack,
    /// Player busts; the dealer wins.
    PlayerBust,
    /// Dealer busts; the player wins.
    DealerBust,
    /// Player wins with the higher value.
    PlayerWins,
    /// Dealer wins with the higher value.
    DealerWins,
    /// Push (tie).
    Push,
}

impl Outcome {
    /// Returns the message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerBlackjack => "Blackjack! Player wins!",
            Self::PlayerBust => "Dealer wins! Player busts.",
            Self::DealerBust => "Player wins! Dealer busts.",
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Push => "It's a tie!",
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn player_won(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins
        )
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn dealer_won(self) -> bool {
        matches!(self, Self::PlayerBust | Self::DealerWins)
    }

    /// Returns the amount returned per unit bet: 2 for a win, 1 for a push,
    /// 0 for a loss. Naturals are not paid differently.
    #[must_use]
    pub const fn payout_multiplier(self) -> usize {
        match self {
            Self::PlayerBlackjack | Self::DealerBust | Self::PlayerWins => 2,
            Self::Push => 1,
            Self::PlayerBust | Self::DealerWins => 0,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Resolves a round from the two final hands.
///
/// Busts are checked before values, so a busted player loses regardless of
/// the dealer's hand.
///
/// ```
/// use twentyone::{Card, Outcome, Rank, Suit, resolve};
///
/// let player = [
///     Card::new(Rank::King, Suit::Hearts),
///     Card::new(Rank::Queen, Suit::Clubs),
/// ];
/// let dealer = [
///     Card::new(Rank::Ten, Suit::Spades),
///     Card::new(Rank::Jack, Suit::Diamonds),
/// ];
/// assert_eq!(resolve(&player, &dealer), Outcome::Push);
/// ```
#[must_use]
pub fn resolve(player: &[Card], dealer: &[Card]) -> Outcome {
    let player_value = hand::value(player);
    let dealer_value = hand::value(dealer);

    if player_value > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > dealer_value {
        if hand::is_blackjack(player) {
            Outcome::PlayerBlackjack
        } else {
            Outcome::PlayerWins
        }
    } else if dealer_value > player_value {
        Outcome::DealerWins
    } else {
        Outcome::Push
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u32,
    /// The dealer's final hand value.
    pub dealer_value: u32,
    /// Whether the player had a natural.
    pub player_blackjack: bool,
    /// Whether the dealer had a natural.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Resolves the two hands and records their values.
    #[must_use]
    pub fn from_hands(player: &[Card], dealer: &[Card]) -> Self {
        Self {
            outcome: resolve(player, dealer),
            player_value: hand::value(player),
            dealer_value: hand::value(dealer),
            player_blackjack: hand::is_blackjack(player),
            dealer_blackjack: hand::is_blackjack(dealer),
        }
    }
}
