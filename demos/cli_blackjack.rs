//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use twentyone::{
    Card, DealerHand, Decision, Deck, ExhaustionPolicy, GameOptions, Hand, LabelStyle, Player,
    Round, RoundState,
};

/// Play blackjack against the dealer in the terminal.
#[derive(Parser, Debug)]
#[command(name = "cli_blackjack", about = "Single-player blackjack in the terminal")]
struct Cli {
    /// Number of decks in the shoe
    #[arg(long, default_value_t = 1)]
    decks: u8,

    /// Shuffle seed (defaults to the current time)
    #[arg(long, env = "BLACKJACK_SEED")]
    seed: Option<u64>,

    /// Starting chips
    #[arg(long, default_value_t = twentyone::DEFAULT_CHIPS)]
    chips: usize,

    /// Reshuffle a fresh shoe when the deck runs out mid-round
    #[arg(long)]
    reshuffle: bool,

    /// Dealer hits soft 17
    #[arg(long)]
    hit_soft_17: bool,
}

impl Cli {
    fn options(&self) -> GameOptions {
        let exhaustion = if self.reshuffle {
            ExhaustionPolicy::Reshuffle
        } else {
            ExhaustionPolicy::Fail
        };
        GameOptions::default()
            .with_decks(self.decks)
            .with_exhaustion(exhaustion)
            .with_stand_on_soft_17(!self.hit_soft_17)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    println!("Welcome to Blackjack! (type 'q' to quit)");
    println!("The goal is to get as close to 21 as possible without going over.");
    println!("Face cards are worth 10, and Aces can be worth 1 or 11.");

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = cli.options();
    let mut deck = Deck::new(options.decks, seed).with_policy(options.exhaustion);
    let mut player = Player::new("Player", cli.chips);

    loop {
        let chips = player.chips();
        if chips == 0 {
            println!("You are out of chips. Game over.");
            break;
        }

        // A fresh shoe once fewer than a quarter remain.
        if deck.len() < deck.number_of_decks() as usize * twentyone::DECK_SIZE / 4 {
            deck.reshuffle();
            println!("Shoe reshuffled.");
        }

        let Some(bet) = prompt_usize(&format!("Bet amount (1-{chips}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            println!("Goodbye.");
            break;
        }
        if let Err(err) = player.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        let mut round = Round::with_deck(options, deck);
        if let Err(err) = round.deal() {
            println!("Deal error: {err}");
            player.settle(twentyone::Outcome::Push);
            deck = round.into_deck();
            deck.reshuffle();
            continue;
        }

        if round.is_over() {
            println!("Blackjack!");
        }

        while round.state() == RoundState::PlayerTurn {
            print_table(&round);

            let input = prompt_line("Do you want to hit (h) or stand (s)? ");
            if input == "q" || input == "quit" {
                return;
            }
            let decision = match input.parse::<Decision>() {
                Ok(decision) => decision,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            };

            match round.act(decision) {
                Ok(drawn) if decision == Decision::Stand && !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => {
                    println!("Action error: {err}");
                    println!("Reshuffling and retrying.");
                    round.deck_mut().reshuffle();
                }
            }
        }

        // A stand interrupted by an empty deck leaves the dealer mid-turn.
        while round.state() == RoundState::DealerTurn {
            if let Err(err) = round.dealer_play() {
                println!("Dealer error: {err}");
                round.deck_mut().reshuffle();
            }
        }

        print_table(&round);
        if let Some(outcome) = round.outcome() {
            println!("{outcome}");
            let payout = player.settle(outcome);
            println!("Payout: {payout} (chips {})", player.chips());
        }

        deck = round.into_deck();
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round) {
    println!("\nShoe: {} cards remaining", round.cards_remaining());

    let dealer = round.dealer_hand();
    println!(
        "Dealer's Hand: {} (Value: {})",
        format_dealer(dealer),
        dealer.visible_value()
    );

    let hand = round.player_hand();
    println!(
        "Player's Hand: {} (Value: {})\n",
        format_hand(hand),
        hand.value()
    );
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_cards(dealer.cards())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("[Hidden]".to_string());
        }
        parts.join(", ")
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn format_card(card: &Card) -> String {
    let color_code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.display(LabelStyle::Long).to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
