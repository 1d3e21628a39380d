use crate::error::DealError;
use crate::options::ExhaustionPolicy;

use super::{Round, RoundState};

/// Cards needed for the opening hands.
const OPENING_CARDS: usize = 4;

impl Round {
    /// Deals two cards each, alternating player and dealer.
    ///
    /// A player natural resolves the round immediately; otherwise the round
    /// moves to [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealing state, or if the
    /// deck fails on exhaustion and holds fewer than four cards. No card is
    /// dealt in either case.
    pub fn deal(&mut self) -> Result<RoundState, DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.policy() == ExhaustionPolicy::Fail && self.deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        self.player.clear();
        self.dealer.clear();

        for _ in 0..2 {
            let card = self.deck.deal().map_err(|_| DealError::NotEnoughCards)?;
            self.player.add_card(card);
            let card = self.deck.deal().map_err(|_| DealError::NotEnoughCards)?;
            self.dealer.add_card(card);
        }

        if self.player.is_blackjack() {
            log::debug!("player natural; skipping to resolution");
            self.finish();
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(self.state)
    }
}
