//! Structural audit of a transition table.
//!
//! The audit walks the table once and reports every problem it finds
//! instead of stopping at the first one, using Stillwater's `Validation`
//! to accumulate findings.
//!
//! Guards are ignored: an edge counts as traversable whether or not its
//! guard would pass at runtime.
//!
//! # Example
//!
//! ```rust
//! use turnkey::audit::AuditFinding;
//! use turnkey::machine::Machine;
//! use stillwater::validation::Validation;
//!
//! #[derive(Clone, PartialEq, Eq, Hash, Debug)]
//! enum Job { Queued, Running, Done, Orphan }
//!
//! let mut machine = Machine::new(Job::Queued);
//! machine
//!     .tr(Job::Queued, "start", Job::Running).unwrap()
//!     .tr(Job::Running, "finish", Job::Done).unwrap()
//!     .tr(Job::Orphan, "start", Job::Running).unwrap();
//!
//! match machine.audit() {
//!     Validation::Failure(findings) => assert_eq!(findings.len(), 2),
//!     Validation::Success(_) => panic!("expected findings"),
//! }
//! ```

mod findings;

pub use findings::AuditFinding;

use crate::core::Key;
use crate::machine::Machine;
use crate::table::TransitionTable;
use std::collections::{HashSet, VecDeque};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of an audit: success, or every finding at once.
pub type AuditResult = Validation<(), NonEmptyVec<AuditFinding>>;

/// Audit `table` as it would be driven from `starting`.
pub fn audit_table<S: Key, T: Key>(table: &TransitionTable<S, T>, starting: &S) -> AuditResult {
    if table.is_empty() {
        return Validation::fail(AuditFinding::EmptyTable);
    }

    let mut checks: Vec<AuditResult> = Vec::new();

    // Dead ends: the starting state and every destination need an exit.
    let mut entered: Vec<&S> = vec![starting];
    for edge in table.edges() {
        if !entered.contains(&edge.next()) {
            entered.push(edge.next());
        }
    }
    for state in entered {
        let check = if table.has_edges_from(state) {
            Validation::success(())
        } else {
            Validation::fail(AuditFinding::DeadEndState {
                state: state.label(),
            })
        };
        checks.push(check);
    }

    // Reachability from the starting state, breadth first.
    let mut reached: HashSet<&S> = HashSet::new();
    let mut queue: VecDeque<&S> = VecDeque::new();
    reached.insert(starting);
    queue.push_back(starting);
    while let Some(state) = queue.pop_front() {
        for edge in table.edges().iter().filter(|edge| edge.from() == state) {
            if reached.insert(edge.next()) {
                queue.push_back(edge.next());
            }
        }
    }
    for state in table.states() {
        let check = if reached.contains(state) {
            Validation::success(())
        } else {
            Validation::fail(AuditFinding::UnreachableState {
                state: state.label(),
                starting: starting.label(),
            })
        };
        checks.push(check);
    }

    Validation::all_vec(checks).map(|_| ())
}

impl<S: Key, T: Key> Machine<S, T> {
    /// Audit the configured table from the starting state.
    ///
    /// Pure inspection: the configuration phase is left as it is.
    pub fn audit(&self) -> AuditResult {
        audit_table(&self.table, &self.starting)
    }
}
