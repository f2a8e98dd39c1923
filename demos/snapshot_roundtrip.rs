//! Snapshot Round Trip
//!
//! This demo captures a calculator mid-calculation, serializes it, and
//! resumes it as a fresh engine.
//!
//! Key concepts:
//! - JSON snapshots are readable, bincode snapshots are compact
//! - Restoring re-validates settings and state
//! - Storage is left to the host
//!
//! Run with: cargo run --example snapshot_roundtrip

use pocketcalc::core::tokenize;
use pocketcalc::snapshot::Snapshot;
use pocketcalc::{Calculator, Token};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Snapshot Round Trip ===\n");

    let mut calc = Calculator::builder()
        .precision(6)
        .tape_limit(20)
        .build()
        .expect("default settings are valid");

    let tokens = tokenize("2 2 / 7").expect("script uses known labels");
    let display = calc.apply_all(tokens);
    println!("Before snapshot: {} (pending {:?})", display.text, display.pending);

    let snapshot = Snapshot::capture(&calc);
    let json = snapshot.to_json().expect("snapshot serializes");
    let bytes = snapshot.to_bytes().expect("snapshot serializes");
    println!("JSON size: {} bytes, binary size: {} bytes\n", json.len(), bytes.len());
    println!("{json}\n");

    let mut resumed = Snapshot::from_bytes(&bytes)
        .and_then(|s| s.restore())
        .expect("snapshot restores");
    let display = resumed.apply(Token::Equals);
    println!("Resumed and pressed '=': {}", display.text);
    println!("Tape entries carried over: {}", resumed.tape().len());

    println!("\n=== Example Complete ===");
}
