//! Errors raised while configuring or driving a machine.

use crate::table::Hook;
use thiserror::Error;

/// Errors that can occur when configuring or driving a state machine.
///
/// Every variant signals a programming or configuration mistake. None of
/// them is retriable, and a failed call never leaves the machine partially
/// updated. States and triggers are carried in their `Debug` rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("Configuration is locked: the machine has already been fired or observed")]
    ConfigurationLocked,

    #[error("Transition from '{from}' on '{trigger}' is already configured")]
    DuplicateTransition { from: String, trigger: String },

    #[error("No transition configured yet. Call .tr(from, trigger, to) first")]
    NoTransitionConfigured,

    #[error("Transition from '{from}' on '{trigger}' already has its {hook} set")]
    AlreadyConfigured {
        hook: Hook,
        from: String,
        trigger: String,
    },

    #[error("No transitions configured from state '{state}'")]
    NoTransitionsForState { state: String },

    #[error("No transition from state '{state}' on trigger '{trigger}'")]
    NoTransitionForTrigger { state: String, trigger: String },

    #[error("State '{state}' has no configured transitions")]
    UnknownState { state: String },
}
