//! Player bankroll.

use alloc::string::String;

use crate::error::BetError;
use crate::outcome::Outcome;

/// Chips a player sits down with unless told otherwise.
pub const DEFAULT_CHIPS: usize = 1000;

/// A seated player with a chip stack and at most one pending bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chips: usize,
    current_bet: usize,
}

impl Player {
    /// Creates a player with the given chip stack.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            chips,
            current_bet: 0,
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chips not currently at stake.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the pending bet, 0 if none.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Places a bet, moving `amount` chips from the stack onto the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero, exceeds the stack, or a bet is
    /// already pending.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if self.current_bet > 0 {
            return Err(BetError::BetPending);
        }
        if self.chips < amount {
            return Err(BetError::InsufficientFunds);
        }

        self.chips -= amount;
        self.current_bet = amount;
        Ok(())
    }

    /// Settles the pending bet and returns the chips paid back.
    ///
    /// A win pays even money, a push returns the bet and a loss forfeits it.
    ///
    /// ```
    /// use twentyone::{Outcome, Player};
    ///
    /// let mut player = Player::new("alice", 100);
    /// player.place_bet(10).unwrap();
    /// assert_eq!(player.settle(Outcome::PlayerWins), 20);
    /// assert_eq!(player.chips(), 110);
    /// ```
    pub fn settle(&mut self, outcome: Outcome) -> usize {
        let payout = self.current_bet * outcome.payout_multiplier();
        self.chips += payout;
        self.current_bet = 0;
        log::debug!("{} settles {outcome:?}: paid {payout}", self.name);
        payout
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new("Player", DEFAULT_CHIPS)
    }
}
