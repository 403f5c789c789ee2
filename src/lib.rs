//! Turnkey: an embeddable transition-table state machine
//!
//! A machine is built from a fixed table of `(state, trigger) -> state`
//! edges, then driven by firing triggers. Edges may carry a guard that can
//! refuse the transition and an action that runs once it is committed; a
//! machine-wide `on_any` hook runs after every committed transition.
//!
//! # Core Concepts
//!
//! - **Keys**: any `Clone + Eq + Hash + Debug` type works as a state or trigger
//! - **Configuration phase**: the table can only be changed until the
//!   machine is first fired or observed
//! - **Guards**: a guard returning `false` silently refuses the transition
//! - **Actions**: run after the state has changed, so they see the new state
//!
//! # Example
//!
//! ```rust
//! use turnkey::machine::{FsmError, Machine};
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Door {
//!     Opened,
//!     Closed,
//! }
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Trigger {
//!     Open,
//!     Close,
//! }
//!
//! let mut door = Machine::new(Door::Closed);
//! door.tr(Door::Closed, Trigger::Open, Door::Opened)
//!     .and_then(|m| m.tr(Door::Opened, Trigger::Close, Door::Closed))
//!     .unwrap();
//!
//! assert!(door.fire(Trigger::Open).unwrap().is_transitioned());
//! assert_eq!(door.current_state(), &Door::Opened);
//!
//! assert!(matches!(
//!     door.fire(Trigger::Open),
//!     Err(FsmError::NoTransitionForTrigger { .. })
//! ));
//!
//! door.reset();
//! assert_eq!(door.current_state(), &Door::Closed);
//! ```

mod macros;

pub mod audit;
pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod table;

// Re-export commonly used types
pub use crate::core::{Key, StateHistory, TransitionRecord};
pub use crate::machine::{FireOutcome, FsmError, Machine, MachineConfig, ResetPolicy};
