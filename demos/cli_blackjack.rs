//! Terminal blackjack front-end.
//!
//! Reads commands, forwards them to the engine as intents and prints the
//! snapshot after every transition. Set `RUST_LOG=debug` to watch the engine
//! work.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Action, Card, CardFace, Game, GameOptions, HandView, Intent, Phase, RoundResult, Snapshot,
    Suit,
};
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    println!("Blackjack (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        let snapshot = game.snapshot();
        match snapshot.phase {
            Phase::Betting => {
                if let Some(result) = &snapshot.last_result {
                    print_result(result);
                }
                print_stats(&snapshot);
                if !betting_turn(&game, &snapshot) {
                    println!("Goodbye.");
                    return;
                }
            }
            Phase::PlayerTurn => {
                print_table(&snapshot);
                let Some(intent) = prompt_action(&snapshot) else {
                    println!("Goodbye.");
                    return;
                };
                send(&game, intent);
            }
            // Dealer play and settlement finish inside the triggering intent
            Phase::DealerTurn | Phase::Settlement => game.new_round(),
        }
    }
}

/// Handles one betting prompt. Returns `false` when the player quits.
fn betting_turn(game: &Game, snapshot: &Snapshot) -> bool {
    if snapshot.chips == 0 {
        println!("You are out of chips.");
        match prompt_line("Refill? (y/n): ").as_str() {
            "y" | "yes" => {
                send(game, Intent::RefillChips);
                return true;
            }
            _ => return false,
        }
    }

    let default = if snapshot.bet > 0 && snapshot.bet <= snapshot.chips {
        format!(", enter for {}", snapshot.bet)
    } else {
        String::new()
    };
    let prompt = format!(
        "Bet (1-{}{default}, 'r' to refill, 'q' to quit): ",
        snapshot.chips
    );

    match prompt_line(&prompt).as_str() {
        "q" | "quit" => return false,
        "r" | "refill" => {
            send(game, Intent::RefillChips);
            return true;
        }
        "" => {}
        input => match input.parse::<usize>() {
            Ok(amount) => {
                if !send(game, Intent::PlaceBet(amount)) {
                    return true;
                }
            }
            Err(_) => {
                println!("Please enter a number.");
                return true;
            }
        },
    }

    send(game, Intent::StartRound);
    true
}

/// Applies an intent and prints the rejection message, if any.
fn send(game: &Game, intent: Intent) -> bool {
    match game.dispatch(intent) {
        Ok(()) => true,
        Err(err) => {
            println!("{}", colorize(&err.to_string(), "33"));
            false
        }
    }
}

fn prompt_action(snapshot: &Snapshot) -> Option<Intent> {
    loop {
        println!("{}", format_actions(snapshot));
        let intent = match prompt_line("Action: ").as_str() {
            "h" | "hit" => Intent::Hit,
            "s" | "stand" => Intent::Stand,
            "d" | "double" => Intent::DoubleDown,
            "p" | "split" => Intent::Split,
            "u" | "surrender" => Intent::Surrender,
            "i" | "insurance" => Intent::TakeInsurance,
            "n" | "no" => Intent::DeclineInsurance,
            "q" | "quit" => return None,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };
        return Some(intent);
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    let dealer = snapshot
        .dealer
        .cards
        .iter()
        .map(|face| match face {
            CardFace::Up(card) => format_card(card),
            CardFace::Down => "??".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    println!(
        "\nDealer: {dealer} (value {})",
        snapshot.dealer.visible_value
    );

    for hand in &snapshot.hands {
        print_hand(hand);
    }
    println!(
        "Chips: {} | in play: {}",
        snapshot.chips, snapshot.locked
    );
    println!("{}\n", snapshot.message);
}

fn print_hand(hand: &HandView) {
    let marker = if hand.is_active { "*" } else { " " };
    let soft = if hand.is_soft { " soft" } else { "" };
    println!(
        "{marker} Hand {}: {} | value {}{soft} | bet {} | {:?}",
        hand.index,
        format_cards(&hand.cards),
        hand.value,
        hand.bet,
        hand.status
    );
}

fn print_result(result: &RoundResult) {
    println!(
        "\nDealer: {} (value {})",
        format_cards(&result.dealer_cards),
        result.dealer_value
    );
    for hand in &result.hands {
        println!(
            "Hand {}: {} | value {} | bet {} | {:?} | paid {}",
            hand.hand_index,
            format_cards(&hand.cards),
            hand.player_value,
            hand.bet,
            hand.outcome,
            hand.payout
        );
    }
    if result.insurance_bet > 0 {
        println!(
            "Insurance: stake {} | paid {}",
            result.insurance_bet, result.insurance_payout
        );
    }
    let net = if result.net >= 0 {
        colorize(&format!("+{}", result.net), "32")
    } else {
        colorize(&result.net.to_string(), "31")
    };
    println!("Net: {net}");
}

fn print_stats(snapshot: &Snapshot) {
    let stats = snapshot.stats;
    println!("{}", snapshot.message);
    println!(
        "Chips: {} | W {} L {} P {} BJ {} over {} rounds",
        snapshot.chips, stats.wins, stats.losses, stats.pushes, stats.blackjacks, stats.rounds
    );
}

fn format_actions(snapshot: &Snapshot) -> String {
    let allowed = |action| snapshot.available_actions.contains(&action);
    let mut parts = vec![
        format_action("hit", "h", allowed(Action::Hit)),
        format_action("stand", "s", allowed(Action::Stand)),
        format_action("double", "d", allowed(Action::DoubleDown)),
        format_action("split", "p", allowed(Action::Split)),
        format_action("surrender", "u", allowed(Action::Surrender)),
    ];
    if snapshot.insurance_offered {
        parts.push(format_action("insurance", "i", allowed(Action::Insurance)));
        parts.push(format_action("no insurance", "n", true));
    }
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
