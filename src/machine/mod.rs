//! The dispatch engine.
//!
//! A [`Machine`] owns its transition table and current state. It is
//! configured through chainable `&mut self` methods and then driven by
//! [`Machine::fire`].
//!
//! # Lifecycle
//!
//! 1. Construction captures the starting state and opens the
//!    configuration phase.
//! 2. `tr`, `guard`/`guard_with`, `on`/`on_with` and `on_any`/`on_any_with`
//!    shape the table.
//! 3. The first `fire`, `current_state`, `is_in_state` or `checkpoint` call
//!    closes configuration permanently.
//! 4. `fire`, `reset` and `reset_to` move the machine from then on.
//!
//! The machine is a plain value without internal synchronization. Hosts
//! that share one between threads wrap it in a lock.

mod config;
mod dispatch;
mod error;
mod state_machine;

pub use config::{MachineConfig, ResetPolicy, DEFAULT_HISTORY_LIMIT};
pub use dispatch::FireOutcome;
pub use error::FsmError;
pub use state_machine::Machine;
