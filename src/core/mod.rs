//! Core building blocks shared by the table and the dispatch engine:
//! - the `Key` trait for states and triggers
//! - guard predicates and post-transition actions
//! - transition history records

mod action;
mod guard;
mod history;
mod state;

pub use action::Action;
pub use guard::Guard;
pub use history::{StateHistory, TransitionRecord};
pub use state::Key;
