//! Guard predicates for controlling transitions.
//!
//! A guard is evaluated right before an edge is taken. Returning `false`
//! refuses the transition without raising an error.

use super::state::Key;
use std::fmt;

type Predicate<S, T> = Box<dyn Fn(&S, &T, &S) -> bool + Send>;

/// Predicate deciding whether a configured edge may be taken.
///
/// Guards receive the state being left, the trigger that was fired and
/// the candidate destination.
///
/// # Example
///
/// ```rust
/// use turnkey::core::Guard;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Light { Red, Green }
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Signal { Go }
///
/// let only_from_red = Guard::new(|from: &Light, _: &Signal, _: &Light| *from == Light::Red);
///
/// assert!(only_from_red.check(&Light::Red, &Signal::Go, &Light::Green));
/// assert!(!only_from_red.check(&Light::Green, &Signal::Go, &Light::Red));
/// ```
pub struct Guard<S: Key, T: Key> {
    predicate: Predicate<S, T>,
}

impl<S: Key, T: Key> Guard<S, T> {
    /// Create a guard from a predicate over `(from, trigger, to)`.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &T, &S) -> bool + Send + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Create a guard that ignores the transition arguments.
    pub fn from_fn<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + 'static,
    {
        Self::new(move |_: &S, _: &T, _: &S| predicate())
    }

    /// Evaluate the guard for a candidate transition.
    pub fn check(&self, from: &S, trigger: &T, to: &S) -> bool {
        (self.predicate)(from, trigger, to)
    }
}

impl<S: Key, T: Key> fmt::Debug for Guard<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
