//! A single configured edge of the transition table.

use crate::core::{Action, Guard, Key};
use crate::machine::FsmError;

/// Which hook slot of an edge is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hook {
    Guard,
    Action,
}

impl std::fmt::Display for Hook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hook::Guard => f.write_str("guard"),
            Hook::Action => f.write_str("action"),
        }
    }
}

/// One configured `(from, trigger) -> next` edge.
///
/// The destination is fixed at creation. Guard and action start empty and
/// can each be attached once.
#[derive(Debug)]
pub struct TransitionEntry<S: Key, T: Key> {
    from: S,
    trigger: T,
    next: S,
    guard: Option<Guard<S, T>>,
    action: Option<Action<S, T>>,
}

impl<S: Key, T: Key> TransitionEntry<S, T> {
    pub(crate) fn new(from: S, trigger: T, next: S) -> Self {
        Self {
            from,
            trigger,
            next,
            guard: None,
            action: None,
        }
    }

    pub fn from(&self) -> &S {
        &self.from
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn next(&self) -> &S {
        &self.next
    }

    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    pub(crate) fn set_guard(&mut self, guard: Guard<S, T>) -> Result<(), FsmError> {
        if self.guard.is_some() {
            return Err(self.already_configured(Hook::Guard));
        }
        self.guard = Some(guard);
        Ok(())
    }

    pub(crate) fn set_action(&mut self, action: Action<S, T>) -> Result<(), FsmError> {
        if self.action.is_some() {
            return Err(self.already_configured(Hook::Action));
        }
        self.action = Some(action);
        Ok(())
    }

    /// Evaluate the guard for leaving `current`. An unset guard always passes.
    pub(crate) fn permits(&self, current: &S) -> bool {
        self.guard
            .as_ref()
            .is_none_or(|g| g.check(current, &self.trigger, &self.next))
    }

    pub(crate) fn run_action(&mut self, from: &S, to: &S) {
        if let Some(action) = self.action.as_mut() {
            action.invoke(from, &self.trigger, to);
        }
    }

    fn already_configured(&self, hook: Hook) -> FsmError {
        FsmError::AlreadyConfigured {
            hook,
            from: self.from.label(),
            trigger: self.trigger.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Start,
        End,
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestTrigger {
        Go,
    }

    fn entry() -> TransitionEntry<TestState, TestTrigger> {
        TransitionEntry::new(TestState::Start, TestTrigger::Go, TestState::End)
    }

    #[test]
    fn new_entry_has_no_hooks() {
        let entry = entry();
        assert_eq!(entry.next(), &TestState::End);
        assert!(!entry.has_guard());
        assert!(!entry.has_action());
        assert!(entry.permits(&TestState::Start));
    }

    #[test]
    fn guard_is_set_once() {
        let mut entry = entry();
        assert!(entry.set_guard(Guard::from_fn(|| false)).is_ok());

        let err = entry.set_guard(Guard::from_fn(|| true)).unwrap_err();
        assert_eq!(
            err,
            FsmError::AlreadyConfigured {
                hook: Hook::Guard,
                from: "Start".to_string(),
                trigger: "Go".to_string(),
            }
        );
        assert!(!entry.permits(&TestState::Start));
    }

    #[test]
    fn action_is_set_once() {
        let mut entry = entry();
        assert!(entry.set_action(Action::from_fn(|| {})).is_ok());
        assert!(matches!(
            entry.set_action(Action::from_fn(|| {})),
            Err(FsmError::AlreadyConfigured {
                hook: Hook::Action,
                ..
            })
        ));
    }

    #[test]
    fn guard_receives_edge_trigger_and_destination() {
        let mut entry = entry();
        entry
            .set_guard(Guard::new(|from: &TestState, trigger: &TestTrigger, to: &TestState| {
                *from == TestState::Start && *trigger == TestTrigger::Go && *to == TestState::End
            }))
            .unwrap();

        assert!(entry.permits(&TestState::Start));
    }
}
