//! Property tests for deck construction and hand scoring.

use std::collections::HashMap;

use proptest::prelude::*;
use twentyone::{Card, DECK_SIZE, Deck, Outcome, Rank, Suit, hand, resolve};

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

proptest! {
    #[test]
    fn shoe_holds_every_card_n_times(decks in 1u8..=8, seed in any::<u64>()) {
        let deck = Deck::new(decks, seed);
        prop_assert_eq!(deck.len(), DECK_SIZE * decks as usize);

        let mut counts: HashMap<Card, usize> = HashMap::new();
        for card in deck.cards() {
            *counts.entry(*card).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), DECK_SIZE);
        prop_assert!(counts.values().all(|&count| count == decks as usize));
    }

    #[test]
    fn dealing_visits_every_position_once(decks in 1u8..=3, seed in any::<u64>()) {
        let mut deck = Deck::new(decks, seed);
        let expected: Vec<Card> = deck.cards().iter().rev().copied().collect();

        let mut dealt = Vec::with_capacity(expected.len());
        while let Ok(card) = deck.deal() {
            dealt.push(card);
        }

        prop_assert_eq!(dealt, expected);
        prop_assert!(deck.is_empty());
    }

    #[test]
    fn value_counts_at_most_one_ace_high(cards in prop::collection::vec(any_card(), 0..80)) {
        let hard: u32 = cards
            .iter()
            .map(|card| if card.is_ace() { 1 } else { u32::from(card.value()) })
            .sum();
        let has_ace = cards.iter().any(Card::is_ace);
        let expected = if has_ace && hard + 10 <= 21 { hard + 10 } else { hard };

        prop_assert_eq!(hand::value(&cards), expected);
    }

    #[test]
    fn busted_player_always_loses(
        player in prop::collection::vec(any_card(), 3..10),
        dealer in prop::collection::vec(any_card(), 2..10),
    ) {
        prop_assume!(hand::value(&player) > 21);
        prop_assert_eq!(resolve(&player, &dealer), Outcome::PlayerBust);
    }
}

#[test]
fn zero_decks_builds_one() {
    assert_eq!(Deck::new(0, 1).len(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    assert_eq!(Deck::new(1, 5).cards(), Deck::new(1, 5).cards());
    assert_ne!(Deck::new(1, 5).cards(), Deck::new(1, 6).cards());
}
