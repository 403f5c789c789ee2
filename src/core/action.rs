//! Post-transition callbacks.

use super::state::Key;
use std::fmt;

type Callback<S, T> = Box<dyn FnMut(&S, &T, &S) + Send>;

/// Callback run after a transition has been committed.
///
/// Used both for per-edge actions and for the machine-wide `on_any` hook.
/// By the time an action runs, the machine already sits in `to`.
pub struct Action<S: Key, T: Key> {
    callback: Callback<S, T>,
}

impl<S: Key, T: Key> Action<S, T> {
    /// Create an action over `(from, trigger, to)`.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&S, &T, &S) + Send + 'static,
    {
        Action {
            callback: Box::new(callback),
        }
    }

    /// Create an action that ignores the transition arguments.
    pub fn from_fn<F>(mut callback: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self::new(move |_: &S, _: &T, _: &S| callback())
    }

    /// Run the callback with the committed transition.
    pub fn invoke(&mut self, from: &S, trigger: &T, to: &S) {
        (self.callback)(from, trigger, to)
    }
}

impl<S: Key, T: Key> fmt::Debug for Action<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn action_receives_transition_arguments() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut action = Action::new(move |from: &u8, trigger: &char, to: &u8| {
            sink.lock().unwrap().push((*from, *trigger, *to));
        });

        action.invoke(&1, &'a', &2);
        action.invoke(&2, &'b', &3);

        assert_eq!(*seen.lock().unwrap(), vec![(1, 'a', 2), (2, 'b', 3)]);
    }

    #[test]
    fn zero_arg_action_can_keep_its_own_state() {
        let count = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&count);
        let mut calls = 0;
        let mut action = Action::<u8, char>::from_fn(move || {
            calls += 1;
            *counter.lock().unwrap() = calls;
        });

        action.invoke(&0, &'x', &1);
        action.invoke(&1, &'x', &0);

        assert_eq!(*count.lock().unwrap(), 2);
    }
}
