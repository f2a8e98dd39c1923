//! Keypad Session
//!
//! This demo feeds scripted keypresses to a calculator and prints the
//! display after each one, the way a host UI would redraw it.
//!
//! Key concepts:
//! - Hosts map button labels to tokens and style keys by category
//! - The engine never fails: errors show the marker and the next key resets
//! - Engine decisions are logged through `tracing`
//!
//! Run with: RUST_LOG=pocketcalc=debug cargo run --example keypad_session

use pocketcalc::core::{State, Token, TokenCategory};
use pocketcalc::Calculator;
use tracing_subscriber::EnvFilter;

const SCRIPTS: &[&str] = &[
    "1 + 2 + 3 =",
    "0 . 1 + 0 . 2 =",
    "9 0 sin",
    "8 / 0 = 5",
    "5 +/- sqrt",
    "5 0 %",
    "1 6 sqrt * 2 =",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");

    for script in SCRIPTS {
        let mut calc = Calculator::new();
        println!("Keys: {script}");

        for label in script.split_whitespace() {
            let token: Token = match label.parse() {
                Ok(token) => token,
                Err(e) => {
                    println!("  {e}");
                    continue;
                }
            };
            let family = match token.category() {
                TokenCategory::Digit => "digit",
                TokenCategory::Action => "action",
                TokenCategory::Extra => "extra",
                TokenCategory::Scientific => "scientific",
            };
            let display = calc.apply(token);
            println!(
                "  [{family:>10}] {label:>4} -> {:>14}  ({})",
                display.text,
                display.phase.name()
            );
        }

        if let Some(error) = calc.last_error() {
            println!("  last error: {error}");
        }
        println!();
    }

    println!("=== Session Complete ===");
}
