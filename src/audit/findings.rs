//! Problems an audit can report about a transition table.

use thiserror::Error;

/// A structural problem in a configured transition table.
///
/// Findings do not prevent a machine from running. They point at states
/// where every `fire` would fail, or at edges that can never be taken.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditFinding {
    #[error("No transitions configured")]
    EmptyTable,

    #[error("State '{state}' can be entered but has no outgoing transitions")]
    DeadEndState { state: String },

    #[error("State '{state}' has transitions but cannot be reached from '{starting}'")]
    UnreachableState { state: String, starting: String },
}
