//! Door State Machine
//!
//! This example demonstrates the basic configure-then-fire lifecycle.
//!
//! Key concepts:
//! - Fluent edge registration
//! - Guards that silently refuse a transition
//! - Lookup failures for unconfigured triggers
//! - Configuration locking after the first fire
//!
//! Run with: RUST_LOG=debug cargo run --example door

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use turnkey::machine::{FireOutcome, FsmError, Machine};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Door {
    Opened,
    Closed,
    Locked,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum Trigger {
    Open,
    Close,
    Lock,
    Unlock,
}

fn main() -> Result<(), FsmError> {
    env_logger::init();
    println!("=== Door State Machine ===\n");

    let has_key = Arc::new(AtomicBool::new(false));
    let key = Arc::clone(&has_key);

    let mut door = Machine::new(Door::Closed);
    door.tr(Door::Closed, Trigger::Open, Door::Opened)?
        .tr(Door::Opened, Trigger::Close, Door::Closed)?
        .tr(Door::Closed, Trigger::Lock, Door::Locked)?
        .tr(Door::Locked, Trigger::Unlock, Door::Closed)?
        .guard(move || key.load(Ordering::SeqCst))?
        .on(|| println!("  [action] click"))?
        .on_any_with(|from, trigger, to| {
            println!("  [on_any] {:?} --{:?}--> {:?}", from, trigger, to)
        })?;

    for trigger in [Trigger::Open, Trigger::Close, Trigger::Lock, Trigger::Unlock] {
        match door.fire(trigger) {
            Ok(FireOutcome::Transitioned { .. }) => {}
            Ok(FireOutcome::Rejected) => println!("  {:?} refused by guard", trigger),
            Err(e) => println!("  {:?} failed: {}", trigger, e),
        }
    }
    println!("Door is {:?}\n", door.current_state());

    println!("Finding the key...");
    has_key.store(true, Ordering::SeqCst);
    door.fire(Trigger::Unlock)?;
    println!("Door is {:?}\n", door.current_state());

    if let Err(e) = door.fire(Trigger::Close) {
        println!("Closing a closed door: {}", e);
    }
    if let Err(e) = door.tr(Door::Opened, Trigger::Lock, Door::Locked) {
        println!("Adding an edge after firing: {}", e);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
