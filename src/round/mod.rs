//! Round engine and turn sequencing.

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::outcome::{Outcome, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{Decision, RoundState};

/// A single round of blackjack between one player and the dealer.
///
/// The round owns its shoe and both hands and moves through
/// [`RoundState::Dealing`], [`RoundState::PlayerTurn`],
/// [`RoundState::DealerTurn`] and [`RoundState::Resolved`].
///
/// # Example
///
/// ```
/// use twentyone::{Decision, GameOptions, Round, RoundState};
///
/// let mut round = Round::new(GameOptions::default(), 42);
/// round.deal().unwrap();
/// if round.state() == RoundState::PlayerTurn {
///     round.act(Decision::Stand).unwrap();
/// }
/// assert!(round.outcome().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards in the shoe.
    deck: Deck,
    /// Round options.
    options: GameOptions,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Set once, when the round resolves.
    result: Option<RoundResult>,
}

impl Round {
    /// Creates a new round with a freshly shuffled shoe from the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let deck = Deck::new(options.decks, seed).with_policy(options.exhaustion);
        Self::with_deck(options, deck)
    }

    /// Creates a new round that deals from an existing shoe.
    ///
    /// The deck keeps its own exhaustion policy; `options.decks` and
    /// `options.exhaustion` are not applied to it.
    #[must_use]
    pub const fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: DealerHand::new(),
            result: None,
        }
    }

    /// Consumes the round and returns its shoe, so the next round can keep
    /// dealing from it.
    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round has resolved.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, RoundState::Resolved)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the shoe mutably, e.g. to reshuffle after an
    /// [`EmptyDeckError`](crate::EmptyDeckError).
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the round result once resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Returns the outcome once resolved.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.result.map(|result| result.outcome)
    }

    /// Reveals the dealer's hole card and fixes the result.
    fn finish(&mut self) {
        self.dealer.reveal_hole();
        let result = RoundResult::from_hands(self.player.cards(), self.dealer.cards());
        self.result = Some(result);
        self.state = RoundState::Resolved;
        log::info!(
            "round resolved: {} (player {}, dealer {})",
            result.outcome,
            result.player_value,
            result.dealer_value
        );
    }
}
