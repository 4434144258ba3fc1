//! CLI blackjack demo.
//!
//! Run with `cargo run --example cli_blackjack`; set `RUST_LOG=debug` to
//! trace every draw.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{ActionError, Round, RoundState};

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    loop {
        let mut round = Round::new(seed);
        seed = seed.wrapping_add(1);

        while round.status() == RoundState::InProgress {
            print_table(&round);

            let result = match prompt_line("Action ([h]it, [s]tand, [q]uit): ").as_str() {
                "h" | "hit" => round.hit().map(|card| println!("You draw {card}.")),
                "s" | "stand" => round.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                print_error(err);
            }
        }

        // Show the hole card even when the player went bust.
        if let Err(err) = round.stand() {
            if err != ActionError::RoundOver {
                print_error(err);
            }
        }

        print_table(&round);
        if let Some(result) = round.result() {
            if result.player_blackjack {
                println!("Blackjack!");
            } else if result.outcome.is_loss() {
                println!("Dealer takes the round.");
            }
            println!(
                "Result: {} (you {}, dealer {})",
                result.outcome.as_str(),
                result.player_value,
                result.dealer_value
            );
        }

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
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

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());
    println!(
        "Dealer: {} (value {})",
        round.dealer_cards(),
        round.dealer_points()
    );
    println!(
        "You:    {} (value {})",
        round.player_cards(),
        round.player_points()
    );
    println!();
}

fn print_error(err: ActionError) {
    println!("Action error: {err}");
}
