//! Turnstile With Checkpoints
//!
//! This example demonstrates declaring a table with the `machine!` macro,
//! auditing it, and resuming from a checkpoint.
//!
//! Run with: cargo run --example turnstile

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use stillwater::validation::Validation;
use turnkey::checkpoint::Checkpoint;
use turnkey::machine;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Turnstile {
    Locked,
    Unlocked,
    Broken,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Input {
    Coin,
    Push,
    Kick,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Turnstile With Checkpoints ===\n");

    let coins = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&coins);

    let mut turnstile = machine! {
        initial: Turnstile::Locked;
        Turnstile::Locked, Input::Push => Turnstile::Locked;
        Turnstile::Unlocked, Input::Push => Turnstile::Locked;
        Turnstile::Unlocked, Input::Kick => Turnstile::Broken;
        Turnstile::Locked, Input::Coin => Turnstile::Unlocked;
    }?;
    turnstile.on(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })?;

    println!("Audit:");
    match turnstile.audit() {
        Validation::Success(_) => println!("  table is clean"),
        Validation::Failure(findings) => {
            for finding in findings.iter() {
                println!("  - {}", finding);
            }
        }
    }

    for input in [Input::Push, Input::Coin, Input::Push, Input::Coin] {
        turnstile.fire(input)?;
    }
    println!("\nState after 4 inputs: {:?}", turnstile.current_state());

    let saved = turnstile.checkpoint().to_json()?;
    println!("Checkpoint: {} bytes of JSON", saved.len());

    let mut resumed = machine! {
        initial: Turnstile::Locked;
        Turnstile::Locked, Input::Push => Turnstile::Locked;
        Turnstile::Unlocked, Input::Push => Turnstile::Locked;
        Turnstile::Unlocked, Input::Kick => Turnstile::Broken;
        Turnstile::Locked, Input::Coin => Turnstile::Unlocked;
    }?;
    resumed.restore(Checkpoint::from_json(&saved)?)?;
    println!("Resumed in {:?}", resumed.current_state());
    println!("Path so far: {:?}", resumed.history().get_path());
    println!("Coins collected before the checkpoint: {}", coins.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
    Ok(())
}
