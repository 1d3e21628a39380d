//! Hand scoring, resolution and bankroll tests.

use twentyone::{
    BetError, Card, DealerHand, Decision, GameOptions, Hand, LabelStyle, Outcome, Player, Rank,
    SoftHand, SplitHand, Suit, hand, resolve,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn hand_of(ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(rank, Suit::Clubs)).collect()
}

#[test]
fn card_values_follow_rank_table() {
    assert_eq!(card(Rank::Two, Suit::Hearts).value(), 2);
    assert_eq!(card(Rank::Ten, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Jack, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Queen, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::King, Suit::Hearts).value(), 10);
    assert_eq!(card(Rank::Ace, Suit::Hearts).value(), 11);
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(hand::value(&[]), 0);
    assert!(!hand::is_blackjack(&[]));
    assert_eq!(Hand::new().value(), 0);
}

#[test]
fn ace_and_king_is_a_natural() {
    let cards = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)];
    assert_eq!(hand::value(&cards), 21);
    assert!(hand::is_blackjack(&cards));
}

#[test]
fn two_aces_and_nine_soften_one_ace() {
    let cards = [
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
    ];
    assert_eq!(hand::value(&cards), 21);
    assert!(!hand::is_blackjack(&cards));
}

#[test]
fn bust_without_aces_stays_bust() {
    let cards = [
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
        card(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(hand::value(&cards), 24);

    let busted: Hand = cards.into_iter().collect();
    assert!(busted.is_bust());
}

#[test]
fn every_ace_can_soften() {
    assert_eq!(hand::value(&hand_of(&[Rank::Ace, Rank::Ace])), 12);
    assert_eq!(
        hand::value(&hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace])),
        14
    );
    assert_eq!(
        hand::value(&hand_of(&[Rank::King, Rank::Queen, Rank::Ace, Rank::Ace])),
        22
    );
}

#[test]
fn shoe_sized_hands_score_exactly() {
    // Every Ace of a six-deck shoe.
    let aces = vec![card(Rank::Ace, Suit::Hearts); 24];
    assert_eq!(hand::value(&aces), 24);

    let mut kings = vec![card(Rank::King, Suit::Spades); 25];
    kings.push(card(Rank::Ace, Suit::Hearts));
    assert_eq!(hand::value(&kings), 251);
    assert!(Hand::from(kings).is_bust());

    let many_aces = vec![card(Rank::Ace, Suit::Hearts); 256];
    assert_eq!(hand::value(&many_aces), 256);
    assert!(!Hand::from(many_aces).is_soft());
}

#[test]
fn three_card_21_is_not_a_natural() {
    let cards = hand_of(&[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(hand::value(&cards), 21);
    assert!(!hand::is_blackjack(&cards));
}

#[test]
fn soft_hand_extension() {
    let soft: Hand = hand_of(&[Rank::Ace, Rank::Six]).into();
    assert!(soft.is_soft());

    let hard: Hand = hand_of(&[Rank::Ace, Rank::Six, Rank::Ten]).into();
    assert_eq!(hard.value(), 17);
    assert!(!hard.is_soft());

    assert!(!Hand::new().is_soft());
}

#[test]
fn split_extension_only_splits_pairs() {
    let pair: Hand = vec![card(Rank::Eight, Suit::Hearts), card(Rank::Eight, Suit::Spades)].into();
    assert!(pair.can_split());
    let (first, second) = pair.split().unwrap();
    assert_eq!(first.cards(), &[card(Rank::Eight, Suit::Hearts)]);
    assert_eq!(second.cards(), &[card(Rank::Eight, Suit::Spades)]);

    let faces: Hand = hand_of(&[Rank::King, Rank::Queen]).into();
    assert!(!faces.can_split());
    assert!(faces.split().is_none());

    let triple: Hand = hand_of(&[Rank::Two, Rank::Two, Rank::Two]).into();
    assert!(!triple.can_split());
}

#[test]
fn dealer_hand_visibility_and_values() {
    let mut dealer = DealerHand::new();
    dealer.add_card(card(Rank::Ace, Suit::Hearts));
    dealer.add_card(card(Rank::Six, Suit::Clubs));

    assert!(!dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 11);
    assert_eq!(dealer.hole_card(), Some(&card(Rank::Six, Suit::Clubs)));

    dealer.reveal_hole();
    assert!(dealer.is_hole_revealed());
    assert_eq!(dealer.visible_value(), 17);
    assert!(dealer.is_soft());

    dealer.clear();
    assert!(dealer.is_empty());
    assert!(!dealer.is_hole_revealed());
}

#[test]
fn resolve_checks_busts_first() {
    let player_22 = hand_of(&[Rank::King, Rank::Queen, Rank::Two]);
    let dealer_18 = hand_of(&[Rank::King, Rank::Eight]);
    assert_eq!(resolve(&player_22, &dealer_18), Outcome::PlayerBust);

    let dealer_23 = hand_of(&[Rank::King, Rank::Queen, Rank::Three]);
    assert_eq!(resolve(&player_22, &dealer_23), Outcome::PlayerBust);

    let player_20 = hand_of(&[Rank::King, Rank::Queen]);
    assert_eq!(resolve(&player_20, &dealer_23), Outcome::DealerBust);
}

#[test]
fn resolve_compares_values() {
    let player_20 = hand_of(&[Rank::King, Rank::Queen]);
    let dealer_20 = hand_of(&[Rank::Jack, Rank::Ten]);
    let dealer_18 = hand_of(&[Rank::King, Rank::Eight]);
    let player_19 = hand_of(&[Rank::Ten, Rank::Nine]);

    assert_eq!(resolve(&player_20, &dealer_20), Outcome::Push);
    assert_eq!(resolve(&player_20, &dealer_18), Outcome::PlayerWins);
    assert_eq!(resolve(&player_19, &dealer_20), Outcome::DealerWins);

    let natural = hand_of(&[Rank::Ace, Rank::King]);
    assert_eq!(resolve(&natural, &dealer_20), Outcome::PlayerBlackjack);
}

#[test]
fn outcome_messages_and_payouts() {
    assert_eq!(Outcome::PlayerBust.to_string(), "Dealer wins! Player busts.");
    assert_eq!(Outcome::DealerBust.to_string(), "Player wins! Dealer busts.");
    assert_eq!(Outcome::Push.to_string(), "It's a tie!");

    assert!(Outcome::PlayerBlackjack.player_won());
    assert!(Outcome::DealerWins.dealer_won());
    assert!(!Outcome::Push.player_won() && !Outcome::Push.dealer_won());
    assert_eq!(Outcome::PlayerBlackjack.payout_multiplier(), 2);
    assert_eq!(Outcome::Push.payout_multiplier(), 1);
    assert_eq!(Outcome::PlayerBust.payout_multiplier(), 0);
}

#[test]
fn card_labels() {
    let ten = card(Rank::Ten, Suit::Diamonds);
    assert_eq!(ten.to_string(), "10 of Diamonds");
    assert_eq!(ten.display(LabelStyle::Long).to_string(), "10 of Diamonds");
    assert_eq!(
        card(Rank::Queen, Suit::Spades)
            .display(LabelStyle::Long)
            .to_string(),
        "Queen of Spades"
    );
    assert_eq!(
        card(Rank::King, Suit::Clubs)
            .display(LabelStyle::Symbol)
            .to_string(),
        "K♣"
    );
}

#[test]
fn decision_parsing() {
    assert_eq!("h".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("HIT".parse::<Decision>(), Ok(Decision::Hit));
    assert_eq!("s".parse::<Decision>(), Ok(Decision::Stand));
    let err = "x".parse::<Decision>().unwrap_err();
    assert_eq!(err.0, "x");
}

#[test]
fn player_bets_and_settles() {
    let mut player = Player::new("alice", 100);
    assert_eq!(player.place_bet(0).unwrap_err(), BetError::ZeroBet);
    assert_eq!(
        player.place_bet(200).unwrap_err(),
        BetError::InsufficientFunds
    );

    player.place_bet(30).unwrap();
    assert_eq!(player.chips(), 70);
    assert_eq!(player.current_bet(), 30);
    assert_eq!(player.place_bet(10).unwrap_err(), BetError::BetPending);

    assert_eq!(player.settle(Outcome::Push), 30);
    assert_eq!(player.chips(), 100);

    player.place_bet(40).unwrap();
    assert_eq!(player.settle(Outcome::DealerWins), 0);
    assert_eq!(player.chips(), 60);
    assert_eq!(player.current_bet(), 0);
}

#[test]
fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_decks(4)
        .with_exhaustion(twentyone::ExhaustionPolicy::Reshuffle)
        .with_stand_on_soft_17(false);

    assert_eq!(options.decks, 4);
    assert_eq!(options.exhaustion, twentyone::ExhaustionPolicy::Reshuffle);
    assert!(!options.stand_on_soft_17);
}
