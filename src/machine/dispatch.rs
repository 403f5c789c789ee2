//! Firing triggers and resetting the current state.

use crate::core::{Key, TransitionRecord};
use crate::machine::config::ResetPolicy;
use crate::machine::error::FsmError;
use crate::machine::state_machine::Machine;
use chrono::Utc;
use log::debug;

/// Result of a successful `fire` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FireOutcome<S> {
    /// The edge was taken and the machine now sits in `to`.
    Transitioned { from: S, to: S },

    /// The edge's guard refused the transition; nothing changed.
    Rejected,
}

impl<S> FireOutcome<S> {
    /// True if the edge was taken.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, FireOutcome::Transitioned { .. })
    }

    /// True if a guard refused the edge.
    pub fn is_rejected(&self) -> bool {
        matches!(self, FireOutcome::Rejected)
    }
}

impl<S: Key, T: Key> Machine<S, T> {
    /// Fire `trigger` from the current state.
    ///
    /// Closes the configuration phase, then resolves the edge for
    /// `(current, trigger)`:
    ///
    /// - no edges from the current state: [`FsmError::NoTransitionsForState`]
    /// - no edge for this trigger: [`FsmError::NoTransitionForTrigger`]
    /// - guard returns `false`: `Ok(FireOutcome::Rejected)`, nothing runs
    ///
    /// Otherwise the current state is updated first, then the edge action
    /// and finally the `on_any` hook run with `(from, trigger, to)`. Lookup
    /// failures leave the current state untouched.
    pub fn fire(&mut self, trigger: T) -> Result<FireOutcome<S>, FsmError> {
        self.lock();

        let position = self.table.lookup(&self.current, &trigger)?;
        let entry = self.table.entry(position);
        if !entry.permits(&self.current) {
            debug!(
                "guard rejected {} --{}--> {}",
                self.current.label(),
                trigger.label(),
                entry.next().label()
            );
            return Ok(FireOutcome::Rejected);
        }

        let to = entry.next().clone();
        let from = std::mem::replace(&mut self.current, to.clone());
        debug!("{} --{}--> {}", from.label(), trigger.label(), to.label());

        self.history.record(TransitionRecord {
            from: from.clone(),
            trigger: trigger.clone(),
            to: to.clone(),
            timestamp: Utc::now(),
        });

        self.table.entry_mut(position).run_action(&from, &to);
        if let Some(hook) = self.on_any.as_mut() {
            hook.invoke(&from, &trigger, &to);
        }

        Ok(FireOutcome::Transitioned { from, to })
    }

    /// Put the machine back in its starting state.
    ///
    /// No guard, action or `on_any` hook runs, nothing is recorded in the
    /// history, and the configuration phase is not reopened.
    pub fn reset(&mut self) {
        debug!(
            "reset {} -> {}",
            self.current.label(),
            self.starting.label()
        );
        self.current = self.starting.clone();
    }

    /// Put the machine in `state` without running any hooks.
    ///
    /// Under [`ResetPolicy::Strict`] the state must have at least one
    /// configured outgoing edge, otherwise [`FsmError::UnknownState`] is
    /// returned and the current state is kept.
    pub fn reset_to(&mut self, state: S) -> Result<(), FsmError> {
        self.check_known(&state)?;
        debug!("reset {} -> {}", self.current.label(), state.label());
        self.current = state;
        Ok(())
    }

    pub(crate) fn check_known(&self, state: &S) -> Result<(), FsmError> {
        match self.config.reset_policy {
            ResetPolicy::Strict if !self.table.has_edges_from(state) => {
                Err(FsmError::UnknownState {
                    state: state.label(),
                })
            }
            _ => Ok(()),
        }
    }
}
