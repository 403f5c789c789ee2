//! Transition table storage.
//!
//! Edges live in a flat list in configuration order. A two-level index
//! maps `state -> trigger -> edge position`, which keeps "no edges from
//! this state" distinguishable from "no edge for this trigger" and lets
//! the configuration cursor be a plain position into the list.

mod entry;

pub use entry::{Hook, TransitionEntry};

use crate::core::Key;
use crate::machine::FsmError;
use std::collections::HashMap;

/// Mapping from `(state, trigger)` pairs to configured edges.
#[derive(Debug)]
pub struct TransitionTable<S: Key, T: Key> {
    edges: Vec<TransitionEntry<S, T>>,
    index: HashMap<S, HashMap<T, usize>>,
}

impl<S: Key, T: Key> Default for TransitionTable<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Key, T: Key> TransitionTable<S, T> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a new edge and return its position.
    ///
    /// An existing edge for the same pair is left untouched and
    /// `DuplicateTransition` is returned instead.
    pub(crate) fn insert(&mut self, from: S, trigger: T, to: S) -> Result<usize, FsmError> {
        let triggers = self.index.entry(from.clone()).or_default();
        if triggers.contains_key(&trigger) {
            return Err(FsmError::DuplicateTransition {
                from: from.label(),
                trigger: trigger.label(),
            });
        }

        let position = self.edges.len();
        triggers.insert(trigger.clone(), position);
        self.edges.push(TransitionEntry::new(from, trigger, to));
        Ok(position)
    }

    /// Resolve the edge position for firing `trigger` while in `state`.
    pub(crate) fn lookup(&self, state: &S, trigger: &T) -> Result<usize, FsmError> {
        let triggers = self
            .index
            .get(state)
            .ok_or_else(|| FsmError::NoTransitionsForState {
                state: state.label(),
            })?;

        triggers
            .get(trigger)
            .copied()
            .ok_or_else(|| FsmError::NoTransitionForTrigger {
                state: state.label(),
                trigger: trigger.label(),
            })
    }

    pub fn get(&self, from: &S, trigger: &T) -> Option<&TransitionEntry<S, T>> {
        self.index
            .get(from)
            .and_then(|triggers| triggers.get(trigger))
            .map(|&position| &self.edges[position])
    }

    pub(crate) fn entry(&self, position: usize) -> &TransitionEntry<S, T> {
        &self.edges[position]
    }

    pub(crate) fn entry_mut(&mut self, position: usize) -> &mut TransitionEntry<S, T> {
        &mut self.edges[position]
    }

    /// True when `state` has at least one outgoing edge.
    pub fn has_edges_from(&self, state: &S) -> bool {
        self.index.contains_key(state)
    }

    /// True when `state` is the source or destination of any edge.
    pub fn mentions(&self, state: &S) -> bool {
        self.has_edges_from(state) || self.edges.iter().any(|edge| edge.next() == state)
    }

    /// Source states in the order their first edge was configured.
    pub fn states(&self) -> Vec<&S> {
        let mut states: Vec<&S> = Vec::new();
        for edge in &self.edges {
            if !states.contains(&edge.from()) {
                states.push(edge.from());
            }
        }
        states
    }

    /// Triggers configured from `state`, in configuration order.
    pub fn triggers_from(&self, state: &S) -> Vec<&T> {
        self.edges
            .iter()
            .filter(|edge| edge.from() == state)
            .map(|edge| edge.trigger())
            .collect()
    }

    pub fn edges(&self) -> &[TransitionEntry<S, T>] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
