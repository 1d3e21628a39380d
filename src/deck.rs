//! Shoe construction, shuffling and dealing.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;
use crate::options::ExhaustionPolicy;

/// Builds `decks` copies of the 52-card set and shuffles them uniformly.
///
/// A value of zero is treated as one deck.
pub fn new_shoe<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Vec<Card> {
    let decks = decks.max(1);
    let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
    }

    cards.shuffle(rng);
    log::debug!("shuffled a {decks}-deck shoe");
    cards
}

/// The working shoe cards are dealt from.
///
/// Dealing removes the last card, so a card is never dealt twice from one
/// shuffle.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    decks: u8,
    policy: ExhaustionPolicy,
    reshuffles: u32,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a shuffled shoe of `decks` decks with the given seed.
    ///
    /// The deck fails with [`EmptyDeckError`] once exhausted; see
    /// [`Deck::with_policy`].
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new(2, 7);
    /// assert_eq!(deck.len(), 2 * DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let decks = decks.max(1);
        Self {
            cards: new_shoe(decks, &mut rng),
            decks,
            policy: ExhaustionPolicy::Fail,
            reshuffles: 0,
            rng,
        }
    }

    /// Creates a single-deck shoe that deals `draws` in order.
    ///
    /// `draws[0]` is the first card dealt. If the deck is exhausted and the
    /// policy is [`ExhaustionPolicy::Reshuffle`], a regular shuffled deck
    /// takes its place.
    ///
    /// ```
    /// use twentyone::{Card, Deck, Rank, Suit};
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let king = Card::new(Rank::King, Suit::Hearts);
    /// let mut deck = Deck::stacked(&[ace, king]);
    /// assert_eq!(deck.deal(), Ok(ace));
    /// assert_eq!(deck.deal(), Ok(king));
    /// assert!(deck.deal().is_err());
    /// ```
    #[must_use]
    pub fn stacked(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: 1,
            policy: ExhaustionPolicy::Fail,
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Sets the exhaustion policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ExhaustionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Deals one card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck is empty and the policy is
    /// [`ExhaustionPolicy::Fail`].
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        if self.cards.is_empty() {
            match self.policy {
                ExhaustionPolicy::Fail => return Err(EmptyDeckError),
                ExhaustionPolicy::Reshuffle => {
                    log::warn!("deck exhausted mid-round; reshuffling a fresh shoe");
                    self.reshuffle();
                }
            }
        }

        let card = self.cards.pop().ok_or(EmptyDeckError)?;
        log::trace!("dealt {card}");
        Ok(card)
    }

    /// Replaces the remaining cards with a freshly shuffled shoe.
    pub fn reshuffle(&mut self) {
        self.cards = new_shoe(self.decks, &mut self.rng);
        self.reshuffles += 1;
    }

    /// Returns the remaining cards; the last one is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of decks in a full shoe.
    #[must_use]
    pub const fn number_of_decks(&self) -> u8 {
        self.decks
    }

    /// Returns the exhaustion policy.
    #[must_use]
    pub const fn policy(&self) -> ExhaustionPolicy {
        self.policy
    }

    /// Returns how many times the shoe has been rebuilt.
    #[must_use]
    pub const fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }
}
