use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::ext::SoftHand;

use super::{Round, RoundState};

/// The dealer draws below this value.
const DEALER_STANDS_ON: u32 = 17;

impl Round {
    /// Returns whether the dealer must take another card.
    fn dealer_must_draw(&self) -> bool {
        let value = self.dealer.value();
        if value < DEALER_STANDS_ON {
            return true;
        }
        value == DEALER_STANDS_ON && !self.options.stand_on_soft_17 && self.dealer.is_soft()
    }

    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher. If `stand_on_soft_17` is false, the dealer also hits soft 17.
    /// The round then resolves.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// runs out while the dealer must draw. Cards drawn before the failure
    /// stay in the dealer's hand and the round remains in the dealer turn,
    /// so the call can be retried after reshuffling.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        while self.dealer_must_draw() {
            let card = self.deck.deal()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        log::debug!(
            "dealer stands on {} after drawing {} card(s)",
            self.dealer.value(),
            drawn_cards.len()
        );
        self.finish();

        Ok(drawn_cards)
    }
}
