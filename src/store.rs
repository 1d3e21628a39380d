//! In-memory registry of rounds for request/response front-ends.
//!
//! An HTTP adapter owns a [`GameStore`] and passes it to its handlers. The
//! registry lock is only held to find or insert a round; each round sits
//! behind its own lock, so concurrent requests for one game serialize while
//! other games proceed.

use core::sync::atomic::{AtomicU64, Ordering};

use alloc::sync::Arc;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::{DealError, StoreError};
use crate::options::GameOptions;
use crate::outcome::Outcome;
use crate::round::{Decision, Round};
use crate::sync::Mutex;

/// Identifier handed out by [`GameStore::create`].
pub type GameId = u64;

/// Snapshot of a game as an adapter would report it.
///
/// The dealer's hole card stays hidden until the round is over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameView {
    /// The game identifier.
    pub game_id: GameId,
    /// The player's cards.
    pub player_hand: Vec<Card>,
    /// The dealer's up card.
    pub dealer_visible: Option<Card>,
    /// The dealer's full hand, once the round is over.
    pub dealer_hand: Option<Vec<Card>>,
    /// The player's hand value.
    pub player_value: u32,
    /// Whether the round has resolved.
    pub is_over: bool,
    /// The outcome, once the round is over.
    pub result: Option<Outcome>,
}

impl GameView {
    /// Builds the view of `round` under the given identifier.
    ///
    /// `dealer_hand` is only filled once the round has resolved, even if the
    /// hole card was turned during an interrupted dealer turn.
    #[must_use]
    pub fn new(game_id: GameId, round: &Round) -> Self {
        let dealer = round.dealer_hand();
        Self {
            game_id,
            player_hand: round.player_hand().cards().to_vec(),
            dealer_visible: dealer.up_card().copied(),
            dealer_hand: round.is_over().then(|| dealer.cards().to_vec()),
            player_value: round.player_hand().value(),
            is_over: round.is_over(),
            result: round.outcome(),
        }
    }
}

/// Registry of in-progress and finished rounds keyed by [`GameId`].
pub struct GameStore {
    /// Options applied to every new round.
    options: GameOptions,
    /// Next identifier to assign.
    next_id: AtomicU64,
    /// Rounds by identifier.
    games: Mutex<HashMap<GameId, Arc<Mutex<Round>>>>,
    /// Seeds each new round's shoe.
    rng: Mutex<ChaCha8Rng>,
}

impl GameStore {
    /// Creates an empty store with the given seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            next_id: AtomicU64::new(1),
            games: Mutex::new(HashMap::new()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the options applied to new rounds.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Starts a new round with a fresh shoe and deals the opening hands.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening hands cannot be dealt.
    pub fn create(&self) -> Result<GameView, DealError> {
        let seed = self.rng.lock().next_u64();
        let mut round = Round::new(self.options, seed);
        round.deal()?;

        let game_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let view = GameView::new(game_id, &round);
        self.games
            .lock()
            .insert(game_id, Arc::new(Mutex::new(round)));

        log::debug!("created game {game_id}");
        Ok(view)
    }

    fn round(&self, game_id: GameId) -> Result<Arc<Mutex<Round>>, StoreError> {
        self.games
            .lock()
            .get(&game_id)
            .cloned()
            .ok_or(StoreError::GameNotFound(game_id))
    }

    /// Returns the current view of a game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist.
    pub fn get(&self, game_id: GameId) -> Result<GameView, StoreError> {
        let round = self.round(game_id)?;
        let round = round.lock();
        Ok(GameView::new(game_id, &round))
    }

    fn act(&self, game_id: GameId, decision: Decision) -> Result<GameView, StoreError> {
        let round = self.round(game_id)?;
        let mut round = round.lock();
        round.act(decision)?;
        Ok(GameView::new(game_id, &round))
    }

    /// Deals the player one card.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist or the round rejects the
    /// hit.
    pub fn hit(&self, game_id: GameId) -> Result<GameView, StoreError> {
        self.act(game_id, Decision::Hit)
    }

    /// Stands and plays out the dealer's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if the game does not exist or the round rejects the
    /// stand.
    pub fn stand(&self, game_id: GameId) -> Result<GameView, StoreError> {
        self.act(game_id, Decision::Stand)
    }

    /// Removes a game. Returns whether it existed.
    pub fn remove(&self, game_id: GameId) -> bool {
        self.games.lock().remove(&game_id).is_some()
    }

    /// Removes every resolved game and returns how many were removed.
    pub fn prune_finished(&self) -> usize {
        let mut games = self.games.lock();
        let before = games.len();
        games.retain(|_, round| !round.lock().is_over());
        before - games.len()
    }

    /// Returns the number of stored games.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}
