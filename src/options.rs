//! Game configuration options.

/// What the deck does when a card is requested after the last one is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ExhaustionPolicy {
    /// Return [`EmptyDeckError`](crate::EmptyDeckError).
    #[default]
    Fail,
    /// Build and shuffle a fresh shoe of the same size, log a warning and
    /// keep dealing. Cards still held in hands may be dealt again.
    Reshuffle,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::{ExhaustionPolicy, GameOptions};
///
/// let options = GameOptions::default()
///     .with_decks(2)
///     .with_exhaustion(ExhaustionPolicy::Reshuffle)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Behavior when the shoe runs out.
    pub exhaustion: ExhaustionPolicy,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            exhaustion: ExhaustionPolicy::Fail,
            stand_on_soft_17: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the deck exhaustion policy.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{ExhaustionPolicy, GameOptions};
    ///
    /// let options = GameOptions::default().with_exhaustion(ExhaustionPolicy::Reshuffle);
    /// assert_eq!(options.exhaustion, ExhaustionPolicy::Reshuffle);
    /// ```
    #[must_use]
    pub const fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
