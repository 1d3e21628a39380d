use alloc::vec;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;

use super::{Decision, Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust resolves the round at once; the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is exhausted. The round state is unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.deal()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            log::debug!("player busts with {}", self.player.value());
            self.finish();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.state = RoundState::DealerTurn;
        Ok(())
    }

    /// Applies a player decision.
    ///
    /// [`Decision::Stand`] also plays out the dealer's hand. If the round is
    /// already in the dealer turn, because an earlier stand ran out of cards,
    /// a stand resumes it. Returns the cards drawn by the action.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision does not fit the round state or the
    /// deck is exhausted. A dealer turn that runs out of cards keeps the cards
    /// drawn so far and leaves the round in [`RoundState::DealerTurn`].
    pub fn act(&mut self, decision: Decision) -> Result<Vec<Card>, ActionError> {
        match decision {
            Decision::Hit => self.hit().map(|card| vec![card]),
            Decision::Stand => {
                if self.state != RoundState::DealerTurn {
                    self.stand()?;
                }
                self.dealer_play()
            }
        }
    }
}
