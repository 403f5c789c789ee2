//! Key trait shared by states and triggers.
//!
//! The engine never inspects states or triggers beyond comparing and
//! hashing them, so both domains are described by one trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for values usable as states or triggers.
///
/// Implemented automatically for every `Clone + Eq + Hash + Debug` type,
/// so plain enums work without any extra code.
///
/// # Required Traits
///
/// - `Clone`: edges store their own copy of source and destination
/// - `Eq` + `Hash`: values are used as lookup keys in the transition table
/// - `Debug`: values are rendered into error messages and log lines
///
/// # Example
///
/// ```rust
/// use turnkey::core::Key;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Opened,
///     Closed,
/// }
///
/// fn assert_key<K: Key>(_: &K) {}
/// assert_key(&Door::Opened);
/// assert_eq!(Door::Closed.label(), "Closed");
/// ```
pub trait Key: Clone + Eq + Hash + Debug {
    /// Render the value for diagnostics.
    fn label(&self) -> String {
        format!("{:?}", self)
    }
}

impl<K: Clone + Eq + Hash + Debug> Key for K {}
